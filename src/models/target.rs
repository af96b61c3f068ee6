use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an input element in discovery order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TargetId(pub usize);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input#{}", self.0)
    }
}

/// An input element found when the document became ready.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputElement {
    pub target: TargetId,
    /// `id` or `name` attribute, if the host knows one. Only used in logs.
    pub name: Option<String>,
}

impl InputElement {
    pub fn new(index: usize) -> Self {
        Self {
            target: TargetId(index),
            name: None,
        }
    }

    pub fn named(index: usize, name: impl Into<String>) -> Self {
        Self {
            target: TargetId(index),
            name: Some(name.into()),
        }
    }
}

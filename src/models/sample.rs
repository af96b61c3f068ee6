use serde::{Deserialize, Serialize};

use crate::signals::PointerSignal;

/// One observation taken by the sampler for the focused input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Milliseconds since the tracker started.
    pub timestamp_ms: f64,
    pub pointer: PointerSignal,
    /// 0..=100, higher means faster typing.
    pub key_score: f64,
}

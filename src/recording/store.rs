use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Sample, SessionInfo, TargetId};

/// Samples recorded for a single input, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecording {
    pub target: TargetId,
    pub samples: Vec<Sample>,
}

/// Per-input sample sequences, iterated in the order each input was first
/// recorded.
#[derive(Debug, Default)]
pub struct RecordingStore {
    recordings: Vec<TargetRecording>,
    index: HashMap<TargetId, usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, target: TargetId, sample: Sample) {
        let slot = match self.index.get(&target) {
            Some(&slot) => slot,
            None => {
                self.recordings.push(TargetRecording {
                    target,
                    samples: Vec::new(),
                });
                let slot = self.recordings.len() - 1;
                self.index.insert(target, slot);
                slot
            }
        };
        self.recordings[slot].samples.push(sample);
    }

    pub fn samples(&self, target: TargetId) -> &[Sample] {
        self.index
            .get(&target)
            .map(|&slot| self.recordings[slot].samples.as_slice())
            .unwrap_or(&[])
    }

    /// Number of recorded inputs.
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.recordings.iter().map(|r| r.samples.len()).sum()
    }

    pub fn snapshot(&self) -> Vec<TargetRecording> {
        self.recordings.clone()
    }

    pub fn clear(&mut self) {
        self.recordings.clear();
        self.index.clear();
    }
}

/// A stable copy of the store, taken while the sampler is stopped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingSnapshot {
    pub session: SessionInfo,
    pub targets: Vec<TargetRecording>,
}

impl RecordingSnapshot {
    pub fn sample_count(&self) -> usize {
        self.targets.iter().map(|r| r.samples.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

use serde::{Deserialize, Serialize};

/// Running average of the gap between keystrokes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyTimingSignal {
    pub total_presses: u64,
    pub total_elapsed_ms: f64,
    pub average_ms: f64,
    pub last_press_ms: Option<f64>,
}

impl KeyTimingSignal {
    /// Record a key press at `now_ms`. The first press contributes no elapsed
    /// time but still counts towards the average's denominator.
    pub fn record_press(&mut self, now_ms: f64) {
        if let Some(last) = self.last_press_ms {
            self.total_elapsed_ms += now_ms - last;
        }
        self.last_press_ms = Some(now_ms);
        self.total_presses += 1;
        self.average_ms = self.total_elapsed_ms / self.total_presses as f64;
    }
}

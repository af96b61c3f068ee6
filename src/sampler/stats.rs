use serde::Serialize;

/// Tick counters kept by the sampling loop.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SamplerStats {
    pub ticks: u64,
    /// Ticks that found an input focused.
    pub focused_ticks: u64,
    /// Ticks with nothing focused.
    pub skipped: u64,
    pub current_interval_ms: u64,
}

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

const DEBUG_ENV_VAR: &str = "BEHAVIOR_TRACKER_DEBUG";

/// How a pointer coordinate that does not fit a color channel is turned into one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ColorOverflow {
    /// Saturate into `0..=255`.
    #[default]
    Clamp,
    /// Truncate, then take the value modulo 256.
    Wrap,
}

/// Tunables for sampling, scoring and export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Sampler interval while the pointer is moving
    pub base_interval_ms: u64,

    /// Backoff ceiling, as a multiple of `base_interval_ms`
    pub max_interval_multiplier: u64,

    /// Consecutive still ticks before the interval doubles
    pub stillness_threshold: u32,

    /// Average key gap that scores 100
    pub score_min_ms: f64,
    /// Average key gap that scores 0
    pub score_max_ms: f64,

    pub color_overflow: ColorOverflow,

    /// File stem used when the first input has no usable value
    pub fallback_file_stem: String,

    /// Log every sampler tick at debug level
    pub debug_ticks: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: 100,
            max_interval_multiplier: 8,
            stillness_threshold: 10,
            score_min_ms: 0.0,
            score_max_ms: 1000.0,
            color_overflow: ColorOverflow::Clamp,
            fallback_file_stem: "heatmap".into(),
            debug_ticks: false,
        }
    }
}

impl TrackerConfig {
    /// Read a JSON config. A missing file yields the defaults; a present but
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read tracker config from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid tracker config in {}", path.display()))?
        } else {
            Self::default()
        };

        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides(mut self) -> Self {
        let debug_mode = std::env::var(DEBUG_ENV_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if debug_mode {
            self.debug_ticks = true;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_interval_ms == 0 {
            bail!("baseIntervalMs must be greater than zero");
        }
        if self.max_interval_multiplier == 0 {
            bail!("maxIntervalMultiplier must be at least 1");
        }
        if self.stillness_threshold == 0 {
            bail!("stillnessThreshold must be greater than zero");
        }
        if !(self.score_max_ms > self.score_min_ms) {
            bail!(
                "scoreMaxMs ({}) must be greater than scoreMinMs ({})",
                self.score_max_ms,
                self.score_min_ms
            );
        }
        Ok(())
    }

    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }

    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms.saturating_mul(self.max_interval_multiplier))
    }
}

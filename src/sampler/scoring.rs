use crate::config::TrackerConfig;

/// Map an average key gap onto 0..=100, linearly and inversely: a gap at or
/// below `min_ms` scores 100, at or above `max_ms` scores 0.
pub fn key_press_score(average_ms: f64, min_ms: f64, max_ms: f64) -> f64 {
    let normalized = ((average_ms - min_ms).max(0.0) / (max_ms - min_ms)).min(1.0);
    100.0 * (1.0 - normalized)
}

/// The score bounds taken from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyScorer {
    pub min_ms: f64,
    pub max_ms: f64,
}

impl KeyScorer {
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            min_ms: config.score_min_ms,
            max_ms: config.score_max_ms,
        }
    }

    pub fn score(&self, average_ms: f64) -> f64 {
        key_press_score(average_ms, self.min_ms, self.max_ms)
    }
}

impl Default for KeyScorer {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn anchors() {
        let scorer = KeyScorer::default();
        assert_eq!(scorer.score(0.0), 100.0);
        assert_eq!(scorer.score(500.0), 50.0);
        assert_eq!(scorer.score(1000.0), 0.0);
    }

    #[test]
    fn clamps_outside_the_range() {
        let scorer = KeyScorer::default();
        assert_eq!(scorer.score(-250.0), 100.0);
        assert_eq!(scorer.score(4_000.0), 0.0);
    }

    #[test]
    fn honours_custom_bounds() {
        assert_eq!(key_press_score(150.0, 100.0, 200.0), 50.0);
        assert_eq!(key_press_score(100.0, 100.0, 200.0), 100.0);
    }

    proptest! {
        #[test]
        fn stays_within_bounds(t in -10_000.0f64..10_000.0) {
            let score = KeyScorer::default().score(t);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn never_increases(a in -2_000.0f64..3_000.0, b in -2_000.0f64..3_000.0) {
            let scorer = KeyScorer::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scorer.score(lo) >= scorer.score(hi));
        }
    }
}

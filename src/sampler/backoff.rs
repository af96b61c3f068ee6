use std::time::Duration;

use crate::config::TrackerConfig;

/// Outcome of comparing a tick's pointer position with the previous tick's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Moved,
    Still,
}

/// Sampling interval that backs off while the pointer rests.
///
/// Every `threshold` consecutive still ticks double the interval, up to
/// `max`. Any movement snaps it back to `base`.
#[derive(Debug, Clone)]
pub struct AdaptiveInterval {
    base: Duration,
    max: Duration,
    threshold: u32,
    current: Duration,
    still_ticks: u32,
    previous: Option<(u64, u64)>,
}

impl AdaptiveInterval {
    pub fn new(base: Duration, max: Duration, threshold: u32) -> Self {
        Self {
            base,
            max: max.max(base),
            threshold,
            current: base,
            still_ticks: 0,
            previous: None,
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(
            config.base_interval(),
            config.max_interval(),
            config.stillness_threshold,
        )
    }

    /// Feed the pointer position seen on this tick. Positions are compared
    /// bit for bit; the first observation always counts as movement.
    pub fn observe(&mut self, position: (f64, f64)) -> Movement {
        let bits = (position.0.to_bits(), position.1.to_bits());

        let movement = if self.previous == Some(bits) {
            self.still_ticks += 1;
            Movement::Still
        } else {
            self.still_ticks = 0;
            self.current = self.base;
            Movement::Moved
        };

        if self.still_ticks >= self.threshold && self.current < self.max {
            self.current = (self.current * 2).min(self.max);
            self.still_ticks = 0;
        }

        self.previous = Some(bits);
        movement
    }

    pub fn interval(&self) -> Duration {
        self.current
    }

    pub fn still_ticks(&self) -> u32 {
        self.still_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_interval() -> AdaptiveInterval {
        AdaptiveInterval::from_config(&TrackerConfig::default())
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_observation_counts_as_movement() {
        let mut backoff = default_interval();
        assert_eq!(backoff.observe((0.0, 0.0)), Movement::Moved);
        assert_eq!(backoff.interval(), ms(100));
        assert_eq!(backoff.still_ticks(), 0);
    }

    #[test]
    fn doubles_after_ten_still_ticks() {
        let mut backoff = default_interval();
        backoff.observe((5.0, 5.0));

        for _ in 0..9 {
            backoff.observe((5.0, 5.0));
        }
        assert_eq!(backoff.interval(), ms(100));
        assert_eq!(backoff.still_ticks(), 9);

        backoff.observe((5.0, 5.0));
        assert_eq!(backoff.interval(), ms(200));
        assert_eq!(backoff.still_ticks(), 0);
    }

    #[test]
    fn caps_at_eight_times_base() {
        let mut backoff = default_interval();
        let mut seen = vec![backoff.interval()];
        backoff.observe((1.0, 1.0));
        for _ in 0..100 {
            backoff.observe((1.0, 1.0));
            if seen.last() != Some(&backoff.interval()) {
                seen.push(backoff.interval());
            }
        }
        assert_eq!(seen, vec![ms(100), ms(200), ms(400), ms(800)]);
    }

    #[test]
    fn still_count_keeps_growing_at_the_cap() {
        let mut backoff = default_interval();
        backoff.observe((1.0, 1.0));
        for _ in 0..30 {
            backoff.observe((1.0, 1.0));
        }
        assert_eq!(backoff.interval(), ms(800));

        for _ in 0..15 {
            backoff.observe((1.0, 1.0));
        }
        assert_eq!(backoff.interval(), ms(800));
        assert_eq!(backoff.still_ticks(), 15);
    }

    #[test]
    fn movement_resets_interval_and_counter() {
        let mut backoff = default_interval();
        backoff.observe((1.0, 1.0));
        for _ in 0..25 {
            backoff.observe((1.0, 1.0));
        }
        assert_eq!(backoff.interval(), ms(400));

        assert_eq!(backoff.observe((1.0, 2.0)), Movement::Moved);
        assert_eq!(backoff.interval(), ms(100));
        assert_eq!(backoff.still_ticks(), 0);
    }

    #[test]
    fn compares_bits_not_values() {
        let mut backoff = default_interval();
        backoff.observe((0.0, 0.0));
        assert_eq!(backoff.observe((-0.0, 0.0)), Movement::Moved);
    }

    #[test]
    fn cap_below_doubling_is_honoured() {
        let mut backoff = AdaptiveInterval::new(ms(100), ms(150), 2);
        backoff.observe((0.0, 0.0));
        backoff.observe((0.0, 0.0));
        backoff.observe((0.0, 0.0));
        assert_eq!(backoff.interval(), ms(150));
    }

    proptest! {
        #[test]
        fn never_exceeds_cap(moves in proptest::collection::vec(any::<bool>(), 0..400)) {
            let mut backoff = default_interval();
            let mut position = 0.0;
            for moved in moves {
                if moved {
                    position += 1.0;
                }
                backoff.observe((position, 0.0));
                prop_assert!(backoff.interval() >= ms(100));
                prop_assert!(backoff.interval() <= ms(800));
            }
        }

        #[test]
        fn any_move_restores_base(still in 0usize..200) {
            let mut backoff = default_interval();
            backoff.observe((3.0, 3.0));
            for _ in 0..still {
                backoff.observe((3.0, 3.0));
            }
            backoff.observe((4.0, 3.0));
            prop_assert_eq!(backoff.interval(), ms(100));
            prop_assert_eq!(backoff.still_ticks(), 0);
        }
    }
}

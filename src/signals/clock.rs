use tokio::time::Instant;

/// Monotonic milliseconds since the tracker was created.
///
/// Backed by tokio's clock so paused-time tests advance it deterministically.
#[derive(Debug, Clone, Copy)]
pub struct TrackerClock {
    epoch: Instant,
}

impl TrackerClock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{
    config::TrackerConfig,
    models::Sample,
    recording::RecordingStore,
    signals::{SignalState, TrackerClock},
    utils::lock_or_recover,
};

use super::backoff::{AdaptiveInterval, Movement};
use super::scoring::KeyScorer;
use super::stats::SamplerStats;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Shared handles the sampling loop reads from and writes into.
#[derive(Clone)]
pub struct SamplerContext {
    pub session_id: String,
    pub signals: Arc<Mutex<SignalState>>,
    pub store: Arc<Mutex<RecordingStore>>,
    pub stats: Arc<Mutex<SamplerStats>>,
    pub clock: TrackerClock,
    pub config: TrackerConfig,
}

/// Tick immediately, then keep rescheduling after the adaptive interval
/// until `cancel_token` fires. The delay is measured from the end of each
/// tick, so a slow tick pushes every later one back.
pub async fn sampling_loop(ctx: SamplerContext, cancel_token: CancellationToken) {
    let mut backoff = AdaptiveInterval::from_config(&ctx.config);
    let scorer = KeyScorer::from_config(&ctx.config);

    log_info!(
        "sampling loop started for session {} (base={}ms, cap={}ms)",
        ctx.session_id,
        ctx.config.base_interval_ms,
        ctx.config.max_interval().as_millis()
    );

    loop {
        if cancel_token.is_cancelled() {
            break;
        }

        let delay = perform_tick(&ctx, &mut backoff, &scorer);

        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }
    }

    log_info!("sampling loop shutting down for session {}", ctx.session_id);
}

/// One sampler tick. Returns the delay before the next one.
pub fn perform_tick(
    ctx: &SamplerContext,
    backoff: &mut AdaptiveInterval,
    scorer: &KeyScorer,
) -> Duration {
    let signals = *lock_or_recover(&ctx.signals);

    let previous = backoff.interval();
    let movement = backoff.observe(signals.pointer.position());
    let interval = backoff.interval();
    if interval > previous {
        log_debug!("pointer still, sampling interval backed off to {}ms", interval.as_millis());
    } else if movement == Movement::Moved && interval < previous {
        log_debug!("pointer moved, sampling interval reset to {}ms", interval.as_millis());
    }

    let recorded = match signals.focus {
        Some(target) => {
            let sample = Sample {
                timestamp_ms: ctx.clock.now_ms(),
                pointer: signals.pointer,
                key_score: scorer.score(signals.keys.average_ms),
            };
            lock_or_recover(&ctx.store).append(target, sample);
            if ctx.config.debug_ticks {
                log_debug!("sample recorded for {target}: {sample:?}");
            }
            true
        }
        None => {
            log::trace!("no input focused, tick skipped");
            false
        }
    };

    let mut stats = lock_or_recover(&ctx.stats);
    stats.ticks += 1;
    if recorded {
        stats.focused_ticks += 1;
    } else {
        stats.skipped += 1;
    }
    stats.current_interval_ms = interval.as_millis() as u64;

    interval
}

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    config::TrackerConfig,
    host::{Document, DownloadSink},
    models::{InputElement, SessionInfo, TargetId},
    recording::{RecordingSnapshot, RecordingStore},
    render::{export_file_name, render_png},
    sampler::{SamplerContext, SamplerController, SamplerStats},
    signals::{SignalState, TrackerClock},
    utils::lock_or_recover,
};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info, log_warn};

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported {
        file_name: String,
        targets: usize,
        samples: usize,
    },
    /// The canvas was not found. Nothing was exported and sampling went on.
    MissingRenderTarget,
}

/// A single behavior tracker: signal state, sampler, recordings and export.
///
/// Event handlers are synchronous and cheap; everything that touches the
/// sampling task is async.
pub struct Tracker {
    session: SessionInfo,
    config: TrackerConfig,
    document: Arc<dyn Document>,
    sink: Arc<dyn DownloadSink>,
    clock: TrackerClock,
    signals: Arc<Mutex<SignalState>>,
    store: Arc<Mutex<RecordingStore>>,
    stats: Arc<Mutex<SamplerStats>>,
    inputs: Mutex<Option<Vec<InputElement>>>,
    sampler: tokio::sync::Mutex<SamplerController>,
}

impl Tracker {
    pub fn new(
        config: TrackerConfig,
        document: Arc<dyn Document>,
        sink: Arc<dyn DownloadSink>,
    ) -> Result<Self> {
        config.validate().context("invalid tracker config")?;

        Ok(Self {
            session: SessionInfo::begin(),
            config,
            document,
            sink,
            clock: TrackerClock::start(),
            signals: Arc::new(Mutex::new(SignalState::new())),
            store: Arc::new(Mutex::new(RecordingStore::new())),
            stats: Arc::new(Mutex::new(SamplerStats::default())),
            inputs: Mutex::new(None),
            sampler: tokio::sync::Mutex::new(SamplerController::new()),
        })
    }

    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Discover the document's inputs (first call only) and start sampling.
    pub async fn start(&self) -> Result<()> {
        self.discover_inputs();
        self.start_sampling().await?;
        log_info!("behavior tracking started for session {}", self.session.id);
        Ok(())
    }

    pub async fn start_sampling(&self) -> Result<()> {
        self.sampler.lock().await.start(self.sampler_context())
    }

    /// Stop sampling and wait until the task has exited.
    pub async fn stop_sampling(&self) -> Result<()> {
        self.sampler.lock().await.stop().await
    }

    pub async fn is_sampling(&self) -> bool {
        self.sampler.lock().await.is_running()
    }

    pub fn on_pointer_move(&self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        lock_or_recover(&self.signals).on_pointer_move(x, y, viewport_width, viewport_height);
        log::trace!("pointer position updated: {x}, {y}");
    }

    pub fn on_key_down(&self) {
        let now_ms = self.clock.now_ms();
        let mut signals = lock_or_recover(&self.signals);
        signals.on_key_down(now_ms);
        log::trace!("key timing updated: average {:.1}ms", signals.keys.average_ms);
    }

    /// Focus moved to `target`, or away from every tracked input. Targets that
    /// were not discovered are ignored.
    pub fn on_focus_change(&self, target: Option<TargetId>) {
        if let Some(target) = target {
            let known = lock_or_recover(&self.inputs)
                .as_ref()
                .is_some_and(|inputs| inputs.iter().any(|input| input.target == target));
            if !known {
                log_warn!("focus change to undiscovered {target} ignored");
                return;
            }
            log::debug!("{target} focused");
        }
        lock_or_recover(&self.signals).on_focus_change(target);
    }

    pub fn inputs(&self) -> Vec<InputElement> {
        lock_or_recover(&self.inputs).clone().unwrap_or_default()
    }

    pub fn signals(&self) -> SignalState {
        *lock_or_recover(&self.signals)
    }

    pub fn sampler_stats(&self) -> SamplerStats {
        *lock_or_recover(&self.stats)
    }

    pub fn recordings(&self) -> RecordingSnapshot {
        RecordingSnapshot {
            session: self.session.clone(),
            targets: lock_or_recover(&self.store).snapshot(),
        }
    }

    /// Forget every recording and reset the tick counters.
    pub fn reset(&self) {
        lock_or_recover(&self.store).clear();
        *lock_or_recover(&self.stats) = SamplerStats::default();
        log_info!("recordings cleared for session {}", self.session.id);
    }

    /// Stop sampling, then render the recordings onto `canvas_id` and hand
    /// the PNG to the download sink. Sampling stays stopped afterwards.
    pub async fn export_heatmap(&self, canvas_id: &str) -> Result<ExportOutcome> {
        let Some(canvas) = self.document.canvas(canvas_id) else {
            log_error!("canvas element '{canvas_id}' not found, export aborted");
            return Ok(ExportOutcome::MissingRenderTarget);
        };

        self.stop_sampling().await?;

        let snapshot = self.recordings();
        if snapshot.targets.is_empty() {
            log_warn!(
                "no recordings for session {}, exporting a blank heat-map",
                self.session.id
            );
        }
        log_info!(
            "drawing {} inputs ({} samples) onto {}x{} canvas",
            snapshot.targets.len(),
            snapshot.sample_count(),
            canvas.width,
            canvas.height
        );

        let png = render_png(&snapshot.targets, canvas, self.config.color_overflow)?;

        let first_value = self
            .inputs()
            .first()
            .and_then(|input| self.document.input_value(input.target));
        let file_name = export_file_name(first_value.as_deref(), &self.config.fallback_file_stem);

        self.sink
            .deliver(&file_name, &png)
            .with_context(|| format!("failed to deliver {file_name}"))?;
        log_info!("heat-map exported as {file_name} ({} bytes)", png.len());

        Ok(ExportOutcome::Exported {
            file_name,
            targets: snapshot.targets.len(),
            samples: snapshot.sample_count(),
        })
    }

    /// Write the current recordings as pretty JSON.
    pub fn export_json(&self, path: &Path) -> Result<PathBuf> {
        let json = self
            .recordings()
            .to_json()
            .context("failed to serialize recordings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write recordings to {}", path.display()))?;
        Ok(path.to_path_buf())
    }

    fn discover_inputs(&self) {
        let mut inputs = lock_or_recover(&self.inputs);
        if inputs.is_some() {
            return;
        }

        let found = self.document.input_elements();
        log_info!("discovered {} input elements", found.len());
        for input in &found {
            log::debug!(
                "tracking {} ({})",
                input.target,
                input.name.as_deref().unwrap_or("unnamed")
            );
        }
        *inputs = Some(found);
    }

    fn sampler_context(&self) -> SamplerContext {
        SamplerContext {
            session_id: self.session.id.clone(),
            signals: Arc::clone(&self.signals),
            store: Arc::clone(&self.store),
            stats: Arc::clone(&self.stats),
            clock: self.clock,
            config: self.config.clone(),
        }
    }
}

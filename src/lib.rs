//! Behavior tracker: watches pointer movement and typing cadence, files
//! samples under whichever input has focus, and renders them as a heat-map.
//!
//! The host forwards document events to a [`Tracker`]; the tracker samples
//! them on an adaptive interval and exports a PNG on request.

pub mod config;
pub mod host;
pub mod models;
pub mod recording;
pub mod render;
pub mod sampler;
pub mod signals;
pub mod tracker;
pub mod utils;

pub use config::{ColorOverflow, TrackerConfig};
pub use host::{CanvasSurface, DirectorySink, Document, DownloadSink};
pub use models::{InputElement, Sample, SessionInfo, TargetId};
pub use recording::{RecordingSnapshot, RecordingStore, TargetRecording};
pub use sampler::{key_press_score, AdaptiveInterval, SamplerStats};
pub use signals::{KeyTimingSignal, PointerSignal, SignalState};
pub use tracker::{ExportOutcome, Tracker};
pub use utils::init_logging;

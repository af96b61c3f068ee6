pub mod store;

pub use store::{RecordingSnapshot, RecordingStore, TargetRecording};

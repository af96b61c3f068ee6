pub mod backoff;
pub mod controller;
pub mod loop_worker;
pub mod scoring;
pub mod stats;

pub use backoff::{AdaptiveInterval, Movement};
pub use controller::SamplerController;
pub use loop_worker::{perform_tick, sampling_loop, SamplerContext};
pub use scoring::{key_press_score, KeyScorer};
pub use stats::SamplerStats;

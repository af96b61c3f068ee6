pub mod sample;
pub mod session;
pub mod target;

pub use sample::Sample;
pub use session::SessionInfo;
pub use target::{InputElement, TargetId};

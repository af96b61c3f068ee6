pub mod logging;
pub mod sync;

pub use logging::init_logging;
pub use sync::lock_or_recover;

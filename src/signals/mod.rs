pub mod clock;
pub mod keys;
pub mod pointer;
pub mod state;

pub use clock::TrackerClock;
pub use keys::KeyTimingSignal;
pub use pointer::PointerSignal;
pub use state::SignalState;

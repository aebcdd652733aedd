//! Platform abstraction layer
//!
//! Timing for a single-threaded event loop:
//! - `FrameClock`: converts elapsed wall time into whole simulation ticks
//! - `OneShot`: a cancellable single-fire timer tied to a session generation

mod clock;
mod timer;

pub use clock::FrameClock;
pub use timer::OneShot;

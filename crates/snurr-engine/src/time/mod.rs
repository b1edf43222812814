//! Time subsystem.
//!
//! - `FrameClock`: per-frame delta time and frame index
//! - `FramePacer`: fixed-timestep scheduling of the next frame

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;

//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop, creates the `Screen` once the platform is ready
//! and drives paced frames until the window is closed.

mod runtime;

pub use runtime::{LoopState, RunSummary, Runtime, RuntimeConfig, Step, next_step};

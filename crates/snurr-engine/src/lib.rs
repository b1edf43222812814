//! Snurr engine crate.
//!
//! This crate owns the platform + GL runtime pieces used by the `snurr` binary:
//! window and context creation, shader compilation, GL resources, the recorded
//! frame plan and the paced event loop.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod scene;
pub mod shader;

//! Window + GL context management.
//!
//! This module is responsible for:
//! - picking a framebuffer config that meets the requested attributes
//! - creating the window, the GL context and its window surface
//! - loading GL function pointers and reporting negotiated properties
//! - presenting frames and releasing everything in reverse acquisition order

mod error;
mod info;
mod init;
mod screen;

pub use error::SetupError;
pub use info::GlInfo;
pub use init::{ColorBits, ScreenInit};
pub use screen::Screen;

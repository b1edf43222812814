//! Frame command stream.
//!
//! Responsibilities:
//! - record the GL work of one frame as plain data
//! - keep the recording independent of a live context, so frame contents can be
//!   checked without a display

mod cmd;
mod list;

pub use cmd::FrameCmd;
pub use list::FramePlan;

use crate::device::SetupError;

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once, right after the context became current.
    ///
    /// GL objects are created here through `ctx.resources`. An error aborts the
    /// run before the first frame.
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> Result<(), SetupError>;

    /// Called once per frame to record the frame's commands.
    ///
    /// The plan already holds the full-window viewport.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once when the loop ends, before GL objects and the context are released.
    fn on_exit(&mut self) {}
}

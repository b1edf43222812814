use crate::coords::Viewport;
use crate::device::GlInfo;
use crate::render::Resources;
use crate::scene::FramePlan;
use crate::time::FrameTime;

/// Setup context passed to `core::App::on_start`.
pub struct StartCtx<'a> {
    pub gl: &'a glow::Context,
    pub info: GlInfo,
    pub viewport: Viewport,
    pub resources: &'a mut Resources,
}

impl StartCtx<'_> {
    /// Enables straight-alpha blending for the rest of the run.
    pub fn enable_alpha_blending(&self) {
        crate::render::enable_alpha_blending(self.gl);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub viewport: Viewport,
    pub time: FrameTime,
    pub plan: &'a mut FramePlan,
}

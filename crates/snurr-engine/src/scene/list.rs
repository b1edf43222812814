use crate::coords::{ColorRgba, Viewport};
use crate::render::{GeometryId, ProgramId};

use super::FrameCmd;

/// Recorded command stream for a frame.
///
/// The runtime clears it before every frame and seeds it with the full-window
/// viewport; the app appends the rest. Capacity is kept across frames.
#[derive(Debug, Default)]
pub struct FramePlan {
    cmds: Vec<FrameCmd>,
}

impl FramePlan {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Returns commands in recording order.
    #[inline]
    pub fn cmds(&self) -> &[FrameCmd] {
        &self.cmds
    }

    #[inline]
    pub fn push(&mut self, cmd: FrameCmd) {
        self.cmds.push(cmd);
    }

    pub fn viewport(&mut self, viewport: Viewport) {
        self.push(FrameCmd::Viewport(viewport));
    }

    /// Clears color and depth.
    pub fn clear_color_depth(&mut self, color: ColorRgba) {
        self.push(FrameCmd::Clear { color });
    }

    pub fn bind_geometry(&mut self, geometry: GeometryId) {
        self.push(FrameCmd::BindGeometry(geometry));
    }

    pub fn use_program(&mut self, program: ProgramId) {
        self.push(FrameCmd::UseProgram(program));
    }

    /// Draws the first `count` vertices of the bound geometry.
    pub fn draw_triangles(&mut self, count: u32) {
        self.push(FrameCmd::DrawTriangles { count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_recording_order() {
        let mut plan = FramePlan::new();
        plan.viewport(Viewport::new(0, 0, 64, 48));
        plan.clear_color_depth(ColorRgba::new(0.0, 0.0, 0.0, 1.0));
        plan.draw_triangles(3);

        assert_eq!(
            plan.cmds(),
            &[
                FrameCmd::Viewport(Viewport::new(0, 0, 64, 48)),
                FrameCmd::Clear {
                    color: ColorRgba::new(0.0, 0.0, 0.0, 1.0)
                },
                FrameCmd::DrawTriangles { count: 3 },
            ]
        );
    }

    #[test]
    fn clear_empties_the_plan() {
        let mut plan = FramePlan::new();
        plan.draw_triangles(3);
        plan.clear();

        assert!(plan.cmds().is_empty());
    }
}

use crate::coords::{ColorRgba, Viewport};
use crate::render::{GeometryId, ProgramId};

/// Renderer-agnostic frame command.
///
/// Commands run in recording order; there is no sorting, since blended draws
/// depend on submission order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameCmd {
    Viewport(Viewport),
    /// Clears color to `color` and depth to the default clear depth.
    Clear { color: ColorRgba },
    BindGeometry(GeometryId),
    UseProgram(ProgramId),
    /// Draws the first `count` vertices of the bound geometry as a triangle list.
    DrawTriangles { count: u32 },
}

//! Two overlapping translucent triangles.
//!
//! One triangle buffer is shared by both programs; the second program shifts
//! every vertex right by half a unit in its vertex stage.

use snurr_engine::coords::ColorRgba;
use snurr_engine::core::StartCtx;
use snurr_engine::device::SetupError;
use snurr_engine::render::{GeometryId, ProgramId, Vertex};
use snurr_engine::scene::FramePlan;
use snurr_engine::shader::ShaderDesc;

/// Apex on top, base corners below, in normalized device coordinates.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
];

pub const CLEAR_COLOR: ColorRgba = ColorRgba::new(0.2, 0.2, 0.2, 0.0);

/// Unshifted magenta triangle, drawn first.
pub const PROGRAM_A: ShaderDesc = ShaderDesc::new(0.0, ColorRgba::new(0.9, 0.0, 0.5, 0.7));

/// Same triangle shifted +0.5 on x, cyan, drawn over A.
pub const PROGRAM_B: ShaderDesc = ShaderDesc::new(0.5, ColorRgba::new(0.0, 0.6, 0.9, 0.7));

#[derive(Debug)]
pub struct OverlapScene {
    triangle: GeometryId,
    programs: [ProgramId; 2],
}

impl OverlapScene {
    /// Uploads the triangle, enables blending and builds both programs.
    pub fn setup(ctx: &mut StartCtx<'_>) -> Result<Self, SetupError> {
        let triangle = ctx.resources.upload(ctx.gl, &TRIANGLE)?;
        ctx.enable_alpha_blending();

        let a = ctx.resources.compile(ctx.gl, &PROGRAM_A)?;
        let b = ctx.resources.compile(ctx.gl, &PROGRAM_B)?;

        Ok(Self {
            triangle,
            programs: [a, b],
        })
    }

    /// Clears, then draws the triangle once per program in order.
    pub fn record(&self, plan: &mut FramePlan) {
        plan.clear_color_depth(CLEAR_COLOR);
        plan.bind_geometry(self.triangle);

        for program in self.programs {
            plan.use_program(program);
            plan.draw_triangles(TRIANGLE.len() as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snurr_engine::scene::FrameCmd;

    fn scene() -> OverlapScene {
        OverlapScene {
            triangle: GeometryId(0),
            programs: [ProgramId(0), ProgramId(1)],
        }
    }

    #[test]
    fn program_a_leaves_vertices_in_place() {
        for v in TRIANGLE {
            let [x, y, z] = v.position;
            assert_eq!(PROGRAM_A.transform(v.position), [x, y, z, 1.0]);
        }
    }

    #[test]
    fn program_b_shifts_every_vertex_right_by_half() {
        for v in TRIANGLE {
            let [x, y, z] = v.position;
            assert_eq!(PROGRAM_B.transform(v.position), [x + 0.5, y, z, 1.0]);
        }
    }

    #[test]
    fn program_colors_are_translucent() {
        assert_eq!(PROGRAM_A.color.to_array(), [0.9, 0.0, 0.5, 0.7]);
        assert_eq!(PROGRAM_B.color.to_array(), [0.0, 0.6, 0.9, 0.7]);
    }

    #[test]
    fn frame_clears_then_draws_a_then_b() {
        let mut plan = FramePlan::new();
        scene().record(&mut plan);

        assert_eq!(
            plan.cmds(),
            &[
                FrameCmd::Clear {
                    color: ColorRgba::new(0.2, 0.2, 0.2, 0.0),
                },
                FrameCmd::BindGeometry(GeometryId(0)),
                FrameCmd::UseProgram(ProgramId(0)),
                FrameCmd::DrawTriangles { count: 3 },
                FrameCmd::UseProgram(ProgramId(1)),
                FrameCmd::DrawTriangles { count: 3 },
            ]
        );
    }

    #[test]
    fn clear_is_the_only_command_before_the_first_draw() {
        let mut plan = FramePlan::new();
        scene().record(&mut plan);

        let first = plan.cmds().first();
        assert!(matches!(first, Some(FrameCmd::Clear { color, .. }) if *color == CLEAR_COLOR));
        let draws = plan
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, FrameCmd::DrawTriangles { .. }))
            .count();
        assert_eq!(draws, 2);
    }
}

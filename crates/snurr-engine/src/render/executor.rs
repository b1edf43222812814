use anyhow::{Context, Result, anyhow, bail};
use glow::HasContext;

use crate::scene::{FrameCmd, FramePlan};

use super::Resources;

/// Runs a recorded plan against the current context.
///
/// Ids are resolved through `resources`. A malformed plan (unknown id, draw
/// without bound geometry, draw past the end of the bound geometry) aborts the
/// frame with an error naming the offending command.
pub fn execute(gl: &glow::Context, plan: &FramePlan, resources: &Resources) -> Result<()> {
    // Vertex count of the bound geometry.
    let mut bound_vertices: Option<u32> = None;

    for (index, cmd) in plan.cmds().iter().enumerate() {
        match *cmd {
            FrameCmd::Viewport(vp) => {
                let (w, h) = vp.gl_size();
                unsafe { gl.viewport(vp.x, vp.y, w, h) };
            }

            FrameCmd::Clear { color } => unsafe {
                gl.clear_color(color.r, color.g, color.b, color.a);
                gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
            },

            FrameCmd::BindGeometry(id) => {
                let geometry = resources
                    .geometry(id)
                    .ok_or_else(|| anyhow!("unknown geometry {id:?}"))
                    .with_context(|| format!("frame command #{index}"))?;
                unsafe { gl.bind_vertex_array(Some(geometry.vertex_array())) };
                bound_vertices = Some(geometry.vertex_count());
            }

            FrameCmd::UseProgram(id) => {
                let program = resources
                    .program(id)
                    .ok_or_else(|| anyhow!("unknown program {id:?}"))
                    .with_context(|| format!("frame command #{index}"))?;
                unsafe { gl.use_program(Some(program.raw())) };
            }

            FrameCmd::DrawTriangles { count } => {
                let count = draw_count(bound_vertices, count)
                    .with_context(|| format!("frame command #{index}"))?;
                unsafe { gl.draw_arrays(glow::TRIANGLES, 0, count) };
            }
        }
    }

    Ok(())
}

/// Checks a draw of `count` vertices against the bound geometry and returns
/// the count `glDrawArrays` takes.
fn draw_count(bound_vertices: Option<u32>, count: u32) -> Result<i32> {
    let Some(available) = bound_vertices else {
        bail!("draw without bound geometry");
    };
    if count > available {
        bail!("draw of {count} vertices exceeds the {available} bound");
    }
    Ok(i32::try_from(count)?)
}

/// Enables straight-alpha blending (`SRC_ALPHA`, `ONE_MINUS_SRC_ALPHA`).
pub fn enable_alpha_blending(gl: &glow::Context) {
    unsafe {
        gl.enable(glow::BLEND);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_within_bound_geometry_is_accepted() {
        assert_eq!(draw_count(Some(3), 3).unwrap(), 3);
        assert_eq!(draw_count(Some(6), 3).unwrap(), 3);
    }

    #[test]
    fn draw_without_geometry_is_an_error() {
        let err = draw_count(None, 3).unwrap_err();
        assert_eq!(err.to_string(), "draw without bound geometry");
    }

    #[test]
    fn draw_past_bound_geometry_is_an_error() {
        let err = draw_count(Some(3), 4).unwrap_err();
        assert_eq!(err.to_string(), "draw of 4 vertices exceeds the 3 bound");
    }
}

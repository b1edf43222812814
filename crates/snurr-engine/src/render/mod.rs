//! GL rendering.
//!
//! `Resources` owns every GL object the app registers during setup; the
//! executor replays a `scene::FramePlan` against them each frame.
//!
//! Convention:
//! - geometry is given directly in normalized device coordinates
//! - positions are `vec3` at attribute location 0

mod executor;
mod resources;

pub use executor::{enable_alpha_blending, execute};
pub use resources::{Geometry, GeometryId, ProgramId, Resources, Vertex};

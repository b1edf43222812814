//! Coordinate and color primitives shared by the scene and the GL executor.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;

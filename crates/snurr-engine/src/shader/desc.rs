use crate::coords::ColorRgba;

/// `#version` line every generated shader starts with.
pub const GLSL_VERSION: &str = "#version 400";

/// A flat-color program: positions pass through, shifted on x by `x_offset`,
/// and every fragment gets `color`.
///
/// Vertex positions are read from attribute location 0 as `vec3`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderDesc {
    pub x_offset: f32,
    pub color: ColorRgba,
}

impl ShaderDesc {
    #[inline]
    pub const fn new(x_offset: f32, color: ColorRgba) -> Self {
        Self { x_offset, color }
    }

    pub fn vertex_source(&self) -> String {
        format!(
            "{GLSL_VERSION}\n\
             layout(location = 0) in vec3 vp;\n\
             void main() {{\n\
             \x20   gl_Position = vec4(vp.x + {}, vp.y, vp.z, 1.0);\n\
             }}\n",
            glsl_float(self.x_offset)
        )
    }

    pub fn fragment_source(&self) -> String {
        let [r, g, b, a] = self.color.to_array().map(glsl_float);
        format!(
            "{GLSL_VERSION}\n\
             out vec4 frag_colour;\n\
             void main() {{\n\
             \x20   frag_colour = vec4({r}, {g}, {b}, {a});\n\
             }}\n"
        )
    }

    /// What the vertex stage computes for `position`: clip-space `vec4`.
    #[inline]
    pub fn transform(&self, position: [f32; 3]) -> [f32; 4] {
        let [x, y, z] = position;
        [x + self.x_offset, y, z, 1.0]
    }
}

/// Formats `v` as a GLSL float literal. `Debug` always keeps a decimal point
/// or exponent, so `1` never turns into an int literal.
fn glsl_float(v: f32) -> String {
    debug_assert!(v.is_finite(), "GLSL has no literal for {v}");
    format!("{v:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFTED: ShaderDesc = ShaderDesc::new(0.5, ColorRgba::new(0.0, 0.6, 0.9, 0.7));

    #[test]
    fn vertex_source_reads_location_zero_and_applies_offset() {
        let src = SHIFTED.vertex_source();
        assert!(src.starts_with("#version 400\n"));
        assert!(src.contains("layout(location = 0) in vec3 vp;"));
        assert!(src.contains("gl_Position = vec4(vp.x + 0.5, vp.y, vp.z, 1.0);"));
    }

    #[test]
    fn fragment_source_writes_flat_color() {
        let src = SHIFTED.fragment_source();
        assert!(src.starts_with("#version 400\n"));
        assert!(src.contains("frag_colour = vec4(0.0, 0.6, 0.9, 0.7);"));
    }

    #[test]
    fn whole_numbers_stay_float_literals() {
        assert_eq!(glsl_float(1.0), "1.0");
        assert_eq!(glsl_float(0.0), "0.0");
        assert_eq!(glsl_float(-2.0), "-2.0");
    }

    #[test]
    fn transform_shifts_only_x() {
        assert_eq!(SHIFTED.transform([0.0, 0.5, 0.0]), [0.5, 0.5, 0.0, 1.0]);
        assert_eq!(SHIFTED.transform([-0.5, -0.5, 0.0]), [0.0, -0.5, 0.0, 1.0]);
    }
}

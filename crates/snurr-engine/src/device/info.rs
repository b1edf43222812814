use std::fmt;

use glutin::config::{ColorBufferType, Config, GlConfig};

/// Negotiated framebuffer and context properties.
///
/// `Display` renders the one-line startup diagnostic.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GlInfo {
    pub major: u32,
    pub minor: u32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub depth: u8,
}

impl GlInfo {
    /// Collects the chosen config's channel depths and the context version
    /// reported by the driver.
    pub fn query(config: &Config, gl: &glow::Context) -> Self {
        use glow::HasContext;

        let (red, green, blue) = rgb_sizes(config.color_buffer_type());
        let version = gl.version();

        Self {
            major: version.major,
            minor: version.minor,
            red,
            green,
            blue,
            depth: config.depth_size(),
        }
    }
}

fn rgb_sizes(buffer: Option<ColorBufferType>) -> (u8, u8, u8) {
    match buffer {
        Some(ColorBufferType::Rgb { r_size, g_size, b_size }) => (r_size, g_size, b_size),
        Some(ColorBufferType::Luminance(size)) => (size, size, size),
        None => (0, 0, 0),
    }
}

impl fmt::Display for GlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GL Version {}.{}, Red size: {}, Green size: {}, Blue size: {}",
            self.major, self.minor, self.red, self.green, self.blue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_line_format() {
        let info = GlInfo {
            major: 4,
            minor: 1,
            red: 8,
            green: 8,
            blue: 8,
            depth: 24,
        };

        assert_eq!(
            info.to_string(),
            "GL Version 4.1, Red size: 8, Green size: 8, Blue size: 8"
        );
    }

    #[test]
    fn rgb_buffer_sizes_are_reported_per_channel() {
        let sizes = rgb_sizes(Some(ColorBufferType::Rgb { r_size: 5, g_size: 6, b_size: 5 }));
        assert_eq!(sizes, (5, 6, 5));
    }

    #[test]
    fn unknown_buffer_reports_zero() {
        assert_eq!(rgb_sizes(None), (0, 0, 0));
    }
}

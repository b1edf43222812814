/// Requested color channel depths, in bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorBits {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorBits {
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Initialization parameters for the GL layer.
///
/// Sizes are minimums: the platform may hand back a deeper framebuffer. The
/// negotiated values are reported through [`GlInfo`](super::GlInfo).
#[derive(Debug, Clone)]
pub struct ScreenInit {
    /// Minimum RGB channel depths.
    pub color_bits: ColorBits,

    /// Minimum depth buffer size in bits.
    pub depth_bits: u8,

    /// Request a double-buffered framebuffer.
    pub double_buffer: bool,

    /// Requested core-profile context version as `(major, minor)`.
    pub gl_version: (u8, u8),

    /// Wait for vertical blank on swap.
    ///
    /// This is a hint; if the platform refuses it the runtime keeps running on
    /// its own frame pacer.
    pub vsync: bool,
}

impl Default for ScreenInit {
    fn default() -> Self {
        Self {
            color_bits: ColorBits::new(5, 5, 5),
            depth_bits: 16,
            double_buffer: true,
            gl_version: (4, 1),
            vsync: true,
        }
    }
}

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Used for clear colors and flat fragment colors. Blending happens on the GPU
/// with `SRC_ALPHA / ONE_MINUS_SRC_ALPHA`, so channels are not premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `[r, g, b, a]` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_array_keeps_channel_order() {
        assert_eq!(ColorRgba::new(0.1, 0.2, 0.3, 0.4).to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}

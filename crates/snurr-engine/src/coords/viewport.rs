use winit::dpi::PhysicalSize;

/// Viewport rectangle in physical pixels, origin at the bottom-left corner as GL
/// expects.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole drawable of `size`.
    #[inline]
    pub const fn full(size: PhysicalSize<u32>) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Width and height as the signed sizes `glViewport` takes, saturating at `i32::MAX`.
    #[inline]
    pub fn gl_size(self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_viewport_covers_the_drawable() {
        let vp = Viewport::full(PhysicalSize::new(640, 480));
        assert_eq!(vp, Viewport::new(0, 0, 640, 480));
    }

    #[test]
    fn gl_size_saturates() {
        let vp = Viewport::new(0, 0, u32::MAX, 10);
        assert_eq!(vp.gl_size(), (i32::MAX, 10));
    }
}

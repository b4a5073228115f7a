use super::Vec2;

/// Viewport size in logical pixels.
///
/// Renderers use this as the document size and the `viewBox` extent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square viewport of `size × size`.
    #[inline]
    pub const fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_center_is_half_size() {
        assert_eq!(Viewport::square(300.0).center(), Vec2::new(150.0, 150.0));
    }

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 10.0).is_valid());
        assert!(Viewport::square(1.0).is_valid());
    }
}

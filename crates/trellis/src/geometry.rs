//! Basic geometry types exchanged with the hosting view and theme.
//!
//! These are boundary types only; layout arithmetic belongs to the view.

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// The largest representable size, used as an unconstrained upper bound.
    pub const MAX: Self = Self {
        width: f32::MAX,
        height: f32::MAX,
    };

    /// Componentwise maximum of two sizes.
    ///
    /// The result bounds both inputs on each axis independently.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Componentwise minimum of two sizes.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }

    /// Returns `true` if this size fits inside `bound` on both axes.
    #[inline]
    pub fn fits_within(&self, bound: Size) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Spacing around the four edges of a control (margins or padding).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Spacing {
    /// Create spacing from individual edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create spacing with the same value on every edge.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// No spacing.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Total horizontal and vertical spacing as a size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.left + self.right, self.top + self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_max_is_componentwise() {
        let wide = Size::new(120.0, 10.0);
        let tall = Size::new(30.0, 48.0);
        assert_eq!(wide.max(tall), Size::new(120.0, 48.0));
        assert_eq!(tall.max(wide), Size::new(120.0, 48.0));
        assert_eq!(wide.min(tall), Size::new(30.0, 10.0));
    }

    #[test]
    fn test_size_sentinels() {
        let size = Size::new(5.0, 7.0);
        assert_eq!(Size::ZERO.max(size), size);
        assert_eq!(Size::MAX.max(size), Size::MAX);
        assert!(size.fits_within(Size::MAX));
        assert!(!size.fits_within(Size::new(5.0, 6.0)));
    }

    #[test]
    fn test_spacing() {
        assert_eq!(Spacing::ZERO, Spacing::default());
        assert_eq!(Spacing::new(1.0, 2.0, 3.0, 4.0).size(), Size::new(4.0, 6.0));
    }
}

#![forbid(unsafe_code)]

//! Geometric primitives for pointer math.

/// A 2D vector in pixel or normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise clamp into `[-limit, limit]`.
    #[inline]
    #[must_use]
    pub fn clamp_abs(self, limit: f32) -> Self {
        Self {
            x: self.x.clamp(-limit, limit),
            y: self.y.clamp(-limit, limit),
        }
    }

    /// The larger of the two component magnitudes (Chebyshev length).
    #[inline]
    #[must_use]
    pub fn max_abs(self) -> f32 {
        self.x.abs().max(self.y.abs())
    }
}

/// Interaction surface extents, in pixels.
///
/// Mirrors the bounding box of the interactive card: pointer positions are
/// normalized against the half-extents so the center maps to `(0, 0)` and
/// the edges to `±1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Surface width in pixels. Must be positive for meaningful output.
    pub width: f32,
    /// Surface height in pixels. Must be positive for meaningful output.
    pub height: f32,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Normalize a position within these bounds to `[-1, 1]` on both axes.
    ///
    /// Positions outside the surface clamp to the edge. Degenerate bounds
    /// (zero or negative extent) normalize to the center rather than
    /// producing NaN.
    #[must_use]
    pub fn normalize(&self, x: f32, y: f32) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        if half_w <= 0.0 || half_h <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2 {
            x: ((x - half_w) / half_w).clamp(-1.0, 1.0),
            y: ((y - half_h) / half_h).clamp(-1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_normalizes_to_origin() {
        let b = Bounds::new(400.0, 500.0);
        assert_eq!(b.normalize(200.0, 250.0), Vec2::ZERO);
    }

    #[test]
    fn edges_normalize_to_unit() {
        let b = Bounds::new(400.0, 500.0);
        let v = b.normalize(400.0, 0.0);
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn out_of_bounds_clamps() {
        let b = Bounds::new(400.0, 500.0);
        let v = b.normalize(1000.0, -50.0);
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn degenerate_bounds_stay_centered() {
        let b = Bounds::new(0.0, 0.0);
        assert_eq!(b.normalize(15.0, 15.0), Vec2::ZERO);
    }

    #[test]
    fn clamp_abs_limits_both_axes() {
        let v = Vec2::new(12.0, -20.0).clamp_abs(8.0);
        assert_eq!(v, Vec2::new(8.0, -8.0));
    }
}

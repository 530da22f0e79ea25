#![forbid(unsafe_code)]

//! Dominant-axis direction classification with a dead zone.
//!
//! A gesture's normalized `(x, y)` intent maps onto one of four compass
//! directions. Classification is pure: the same input always produces the
//! same output.
//!
//! # Invariants
//!
//! 1. Both axes below the dead zone classify as `None` (no committed
//!    direction).
//! 2. The larger-magnitude axis wins; exact ties resolve to the horizontal
//!    axis.
//! 3. Sign selects the compass point: `x > 0` is east, `y > 0` is south
//!    (screen coordinates, y grows downward).

/// Default dead-zone magnitude below which no direction is classified.
pub const DEFAULT_DEAD_ZONE: f32 = 0.2;

/// A committed swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Upward (negative y).
    North,
    /// Downward (positive y).
    South,
    /// Rightward (positive x).
    East,
    /// Leftward (negative x).
    West,
}

impl Direction {
    /// Classify a normalized intent vector using [`DEFAULT_DEAD_ZONE`].
    #[must_use]
    pub fn classify(x: f32, y: f32) -> Option<Self> {
        Self::classify_with(x, y, DEFAULT_DEAD_ZONE)
    }

    /// Classify a normalized intent vector against an explicit dead zone.
    #[must_use]
    pub fn classify_with(x: f32, y: f32, dead_zone: f32) -> Option<Self> {
        let abs_x = x.abs();
        let abs_y = y.abs();
        if abs_x < dead_zone && abs_y < dead_zone {
            return None;
        }
        Some(Self::dominant_axis(x, y))
    }

    /// Pick a direction from raw deltas by dominant axis, with no dead zone.
    ///
    /// Used for release commits where the caller has already applied a
    /// pixel displacement threshold.
    #[must_use]
    pub fn dominant_axis(x: f32, y: f32) -> Self {
        if x.abs() >= y.abs() {
            if x > 0.0 { Self::East } else { Self::West }
        } else if y > 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    /// The opposite compass point.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Whether this direction runs along the horizontal axis.
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dead_zone_returns_none() {
        assert_eq!(Direction::classify(0.1, 0.05), None);
        assert_eq!(Direction::classify(-0.19, 0.19), None);
    }

    #[test]
    fn one_axis_past_dead_zone_classifies() {
        assert_eq!(Direction::classify(0.1, 0.5), Some(Direction::South));
        assert_eq!(Direction::classify(0.5, 0.1), Some(Direction::East));
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(Direction::classify(0.8, 0.3), Some(Direction::East));
        assert_eq!(Direction::classify(-0.8, 0.3), Some(Direction::West));
        assert_eq!(Direction::classify(0.3, 0.8), Some(Direction::South));
        assert_eq!(Direction::classify(0.3, -0.8), Some(Direction::North));
    }

    #[test]
    fn ties_resolve_horizontal() {
        assert_eq!(Direction::classify(0.5, 0.5), Some(Direction::East));
        assert_eq!(Direction::classify(-0.5, -0.5), Some(Direction::West));
    }

    proptest! {
        #[test]
        fn classification_is_pure(x in -1.0f32..1.0, y in -1.0f32..1.0) {
            prop_assert_eq!(Direction::classify(x, y), Direction::classify(x, y));
        }

        #[test]
        fn dead_zone_is_exhaustive(x in -0.199f32..0.199, y in -0.199f32..0.199) {
            prop_assert_eq!(Direction::classify(x, y), None);
        }
    }
}

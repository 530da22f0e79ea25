#![forbid(unsafe_code)]

//! Canonical pointer events consumed by the gesture tracker.
//!
//! These are the only inputs the interaction engine accepts: hover motion,
//! hover exit, click, and drag deltas. The renderer/platform layer is
//! responsible for translating its native events (mouse, touch, framework
//! drag callbacks) into this shape.

use crate::geometry::Bounds;

/// A normalized pointer event.
///
/// Hover positions are relative to the interactive surface's top-left
/// corner; drag deltas are relative to the drag origin and unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved over the surface without a button held.
    Move {
        /// Horizontal position within the surface, in pixels.
        x: f32,
        /// Vertical position within the surface, in pixels.
        y: f32,
        /// Extents of the surface at event time.
        bounds: Bounds,
    },
    /// Pointer left the surface. Resets the gesture to neutral.
    Leave,
    /// Click/tap on the surface. Commits only if a direction is already
    /// classified with sufficient strength.
    Click,
    /// In-progress drag displacement from the drag origin.
    DragMove {
        /// Horizontal displacement in pixels.
        dx: f32,
        /// Vertical displacement in pixels.
        dy: f32,
    },
    /// Drag released with a final displacement from the drag origin.
    DragRelease {
        /// Horizontal displacement in pixels.
        dx: f32,
        /// Vertical displacement in pixels.
        dy: f32,
    },
}

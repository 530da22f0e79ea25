#![forbid(unsafe_code)]

//! Gesture tracking: transforms raw pointer input into a committed swipe.
//!
//! [`GestureTracker`] is a stateful processor that converts
//! [`PointerEvent`] sequences into a live [`GestureState`] (tilt vector,
//! direction, strength) and, on release or click, an optional committed
//! [`Direction`].
//!
//! # Invariants
//!
//! 1. All derived values are clamped: tilt within the configured range,
//!    strength within `[0, 1]`. No input produces an error state.
//! 2. A release below the displacement threshold is a cancellation: the
//!    state resets to neutral and nothing is committed.
//! 3. A click commits only when hover has already classified a direction
//!    with strength at or above the configured minimum.
//! 4. Accepted commits arm a cooldown latch; a second commit inside the
//!    cooldown window is dropped, not queued.
//! 5. After an accepted commit or [`reset`](GestureTracker::reset), the
//!    state is neutral.

use web_time::{Duration, Instant};

use crate::direction::Direction;
use crate::event::PointerEvent;
use crate::geometry::{Bounds, Vec2};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and scales for gesture tracking.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Normalized magnitude below which no direction is classified
    /// (default: 0.2).
    pub dead_zone: f32,
    /// Pixel displacement a drag release must exceed on at least one axis
    /// to commit (default: 120).
    pub release_threshold: f32,
    /// Minimum hover strength for a click to commit (default: 0.45).
    pub click_min_strength: f32,
    /// Window during which a second commit is dropped (default: 200ms).
    pub commit_cooldown: Duration,
    /// Fixed divisor normalizing unbounded drag deltas (default: 200).
    pub drag_divisor: f32,
    /// Maximum tilt produced by hover, in degrees (default: 6).
    pub hover_tilt: f32,
    /// Maximum tilt produced by drag, in degrees (default: 8).
    pub drag_tilt: f32,
    /// Divisor mapping drag pixels onto tilt degrees (default: 30).
    pub drag_tilt_divisor: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dead_zone: 0.2,
            release_threshold: 120.0,
            click_min_strength: 0.45,
            commit_cooldown: Duration::from_millis(200),
            drag_divisor: 200.0,
            hover_tilt: 6.0,
            drag_tilt: 8.0,
            drag_tilt_divisor: 30.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Gesture state
// ---------------------------------------------------------------------------

/// Transient per-interaction gesture state.
///
/// Feeds the view-model: the tilt vector drives the active card's 3D lean,
/// the direction/strength pair drives the directional glow and decides
/// whether a click commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Visual tilt in degrees: `x` is rotation around the vertical axis,
    /// `y` around the horizontal axis.
    pub tilt: Vec2,
    /// Classified direction, if the intent left the dead zone.
    pub direction: Option<Direction>,
    /// Gesture magnitude in `[0, 1]` (Chebyshev norm of the intent).
    pub strength: f32,
}

impl GestureState {
    /// The neutral resting state.
    pub const NEUTRAL: Self = Self {
        tilt: Vec2::ZERO,
        direction: None,
        strength: 0.0,
    };
}

impl Default for GestureState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Stateful gesture tracker for one interactive card surface.
///
/// Call [`process`](GestureTracker::process) for each incoming
/// [`PointerEvent`]; a returned [`Direction`] is an accepted commit the
/// stack engine should act on. The live state for rendering is always
/// available via [`state`](GestureTracker::state).
#[derive(Debug, Clone)]
pub struct GestureTracker {
    config: GestureConfig,
    state: GestureState,
    last_commit: Option<Instant>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureTracker {
    /// Create a tracker with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::NEUTRAL,
            last_commit: None,
        }
    }

    /// The current gesture state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Process a pointer event, returning an accepted commit if one fired.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> Option<Direction> {
        match *event {
            PointerEvent::Move { x, y, bounds } => {
                self.update_from_pointer(x, y, bounds);
                None
            }
            PointerEvent::Leave => {
                self.state = GestureState::NEUTRAL;
                None
            }
            PointerEvent::Click => self.commit_on_click(now),
            PointerEvent::DragMove { dx, dy } => {
                self.update_from_drag(dx, dy);
                None
            }
            PointerEvent::DragRelease { dx, dy } => self.commit_on_release(dx, dy, now),
        }
    }

    /// Update the gesture from a hover position within `bounds`.
    pub fn update_from_pointer(&mut self, x: f32, y: f32, bounds: Bounds) {
        let n = bounds.normalize(x, y);
        self.state = GestureState {
            tilt: Vec2::new(n.x * self.config.hover_tilt, -n.y * self.config.hover_tilt),
            direction: Direction::classify_with(n.x, n.y, self.config.dead_zone),
            strength: n.max_abs().clamp(0.0, 1.0),
        };
    }

    /// Update the gesture from an in-progress drag displacement.
    ///
    /// Drag deltas are unbounded, so intent is normalized against the fixed
    /// pixel divisor rather than the surface extents.
    pub fn update_from_drag(&mut self, dx: f32, dy: f32) {
        let tilt = Vec2::new(
            dx / self.config.drag_tilt_divisor,
            -dy / self.config.drag_tilt_divisor,
        )
        .clamp_abs(self.config.drag_tilt);
        let n = Vec2::new(dx / self.config.drag_divisor, dy / self.config.drag_divisor)
            .clamp_abs(1.0);
        self.state = GestureState {
            tilt,
            direction: Direction::classify_with(n.x, n.y, self.config.dead_zone),
            strength: n.max_abs().clamp(0.0, 1.0),
        };
    }

    /// Handle a drag release with final displacement `(dx, dy)`.
    ///
    /// Below the release threshold on both axes the gesture is cancelled:
    /// the state resets and `None` is returned. Past the threshold the
    /// dominant axis commits, subject to the cooldown latch. The state
    /// resets on every path.
    pub fn commit_on_release(&mut self, dx: f32, dy: f32, now: Instant) -> Option<Direction> {
        self.state = GestureState::NEUTRAL;
        if dx.abs() < self.config.release_threshold && dy.abs() < self.config.release_threshold {
            return None;
        }
        if !self.try_latch(now) {
            return None;
        }
        Some(Direction::dominant_axis(dx, dy))
    }

    /// Handle a click/tap.
    ///
    /// Commits only if hover already classified a direction and its strength
    /// meets the configured minimum; otherwise the hover state is left
    /// untouched so the user can keep leaning.
    pub fn commit_on_click(&mut self, now: Instant) -> Option<Direction> {
        let direction = self.state.direction?;
        if self.state.strength < self.config.click_min_strength {
            return None;
        }
        if !self.try_latch(now) {
            return None;
        }
        self.state = GestureState::NEUTRAL;
        Some(direction)
    }

    /// Reset the gesture to neutral without touching the commit latch.
    ///
    /// Called on pointer leave and whenever the active item changes.
    pub fn reset(&mut self) {
        self.state = GestureState::NEUTRAL;
    }

    /// Whether a commit attempted at `now` would be inside the cooldown.
    #[must_use]
    pub fn in_cooldown(&self, now: Instant) -> bool {
        self.last_commit
            .is_some_and(|t| now.duration_since(t) < self.config.commit_cooldown)
    }

    /// Arm the latch if outside the cooldown window.
    fn try_latch(&mut self, now: Instant) -> bool {
        if self.in_cooldown(now) {
            return false;
        }
        self.last_commit = Some(now);
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(400.0, 400.0);
    const MS_50: Duration = Duration::from_millis(50);
    const MS_250: Duration = Duration::from_millis(250);

    fn tracker() -> GestureTracker {
        GestureTracker::default()
    }

    #[test]
    fn hover_produces_tilt_and_strength() {
        let mut tr = tracker();
        // Right edge, vertically centered: nx = 1, ny = 0.
        tr.update_from_pointer(400.0, 200.0, BOUNDS);
        let s = tr.state();
        assert_eq!(s.tilt, Vec2::new(6.0, -0.0));
        assert_eq!(s.direction, Some(Direction::East));
        assert!((s.strength - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hover_inside_dead_zone_has_no_direction() {
        let mut tr = tracker();
        // x = 0.1, y = 0.05 normalized.
        tr.update_from_pointer(220.0, 210.0, BOUNDS);
        let s = tr.state();
        assert_eq!(s.direction, None);
        assert!(s.strength < 0.2);
    }

    #[test]
    fn click_in_dead_zone_does_not_commit() {
        let mut tr = tracker();
        tr.update_from_pointer(220.0, 210.0, BOUNDS);
        assert_eq!(tr.commit_on_click(Instant::now()), None);
    }

    #[test]
    fn weak_lean_click_does_not_commit() {
        let mut tr = tracker();
        // nx = 0.3: classified east, but below the 0.45 click minimum.
        tr.update_from_pointer(260.0, 200.0, BOUNDS);
        assert_eq!(tr.state().direction, Some(Direction::East));
        assert_eq!(tr.commit_on_click(Instant::now()), None);
        // Hover state survives a refused click.
        assert_eq!(tr.state().direction, Some(Direction::East));
    }

    #[test]
    fn strong_lean_click_commits() {
        let mut tr = tracker();
        tr.update_from_pointer(400.0, 200.0, BOUNDS);
        assert_eq!(tr.commit_on_click(Instant::now()), Some(Direction::East));
        assert_eq!(tr.state(), GestureState::NEUTRAL);
    }

    #[test]
    fn release_below_threshold_cancels() {
        let mut tr = tracker();
        tr.update_from_drag(50.0, 10.0);
        assert_eq!(tr.commit_on_release(50.0, 10.0, Instant::now()), None);
        assert_eq!(tr.state(), GestureState::NEUTRAL);
    }

    #[test]
    fn release_past_threshold_commits_dominant_axis() {
        let mut tr = tracker();
        assert_eq!(
            tr.commit_on_release(200.0, 10.0, Instant::now()),
            Some(Direction::East)
        );
        assert_eq!(
            tr.commit_on_release(-10.0, -150.0, Instant::now() + MS_250),
            Some(Direction::North)
        );
    }

    #[test]
    fn cooldown_drops_rapid_commits() {
        let mut tr = tracker();
        let t = Instant::now();
        assert_eq!(tr.commit_on_release(200.0, 0.0, t), Some(Direction::East));
        // Second commit 50ms later lands inside the 200ms window.
        assert_eq!(tr.commit_on_release(200.0, 0.0, t + MS_50), None);
        // After the window it is accepted again.
        assert_eq!(
            tr.commit_on_release(200.0, 0.0, t + MS_250),
            Some(Direction::East)
        );
    }

    #[test]
    fn drag_tilt_is_clamped() {
        let mut tr = tracker();
        tr.update_from_drag(600.0, -600.0);
        assert_eq!(tr.state().tilt, Vec2::new(8.0, 8.0));
        assert!((tr.state().strength - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn leave_resets_to_neutral() {
        let mut tr = tracker();
        tr.update_from_pointer(400.0, 200.0, BOUNDS);
        tr.process(&PointerEvent::Leave, Instant::now());
        assert_eq!(tr.state(), GestureState::NEUTRAL);
    }

    #[test]
    fn process_routes_events() {
        let mut tr = tracker();
        let t = Instant::now();
        assert_eq!(
            tr.process(
                &PointerEvent::Move {
                    x: 400.0,
                    y: 200.0,
                    bounds: BOUNDS
                },
                t
            ),
            None
        );
        assert_eq!(
            tr.process(&PointerEvent::Click, t),
            Some(Direction::East)
        );
        assert_eq!(
            tr.process(&PointerEvent::DragRelease { dx: 0.0, dy: 150.0 }, t + MS_250),
            Some(Direction::South)
        );
    }
}

#![forbid(unsafe_code)]

//! View-model: transform hints handed to the declarative renderer.
//!
//! The engine never draws. Instead it emits, per render pass, an ordered
//! set of [`StackSlot`]s whose [`CardTransform`]s describe where each card
//! sits (offset, scale, rotation, opacity, z-order), plus enter/exit
//! transforms for the card swapped by the last commit and a directional
//! [`GlowHint`] for the live gesture.

use swipedeck_core::{Direction, GestureState, Vec2};

use crate::stack::GalleryState;

/// Pixel offset a card enters from.
const ENTER_OFFSET: f32 = 220.0;
/// Pixel offset a card exits toward.
const EXIT_OFFSET: f32 = 260.0;

/// Per-card transform hint. Units match the renderer: pixels for offsets,
/// degrees for rotation, `[0, 1]` for opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Translation from the slot's rest position.
    pub offset: Vec2,
    /// Uniform scale.
    pub scale: f32,
    /// In-plane rotation, degrees.
    pub rotate: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Z-order; higher renders on top.
    pub z: i32,
}

impl CardTransform {
    /// The at-rest transform for the front card.
    pub const CENTER: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotate: 0.0,
        opacity: 1.0,
        z: 0,
    };

    /// Where a card entering the stack starts.
    ///
    /// `direction` is the commit that brought it in; `None` is the
    /// back-navigation variant, rising from below.
    #[must_use]
    pub fn enter(direction: Option<Direction>) -> Self {
        let base = Self {
            scale: 0.96,
            opacity: 0.0,
            ..Self::CENTER
        };
        match direction {
            Some(Direction::North) => Self {
                offset: Vec2::new(0.0, -ENTER_OFFSET),
                rotate: -2.0,
                ..base
            },
            Some(Direction::South) => Self {
                offset: Vec2::new(0.0, ENTER_OFFSET),
                rotate: 2.0,
                ..base
            },
            Some(Direction::West) => Self {
                offset: Vec2::new(-ENTER_OFFSET, 0.0),
                rotate: -3.0,
                ..base
            },
            Some(Direction::East) => Self {
                offset: Vec2::new(ENTER_OFFSET, 0.0),
                rotate: 3.0,
                ..base
            },
            None => Self {
                offset: Vec2::new(0.0, 40.0),
                scale: 0.95,
                ..base
            },
        }
    }

    /// Where the outgoing card flies. The throw continues the swipe: an
    /// east commit discards the card westward off-screen.
    #[must_use]
    pub fn exit(direction: Option<Direction>) -> Self {
        let base = Self {
            scale: 0.94,
            opacity: 0.0,
            ..Self::CENTER
        };
        match direction {
            Some(Direction::North) => Self {
                offset: Vec2::new(0.0, EXIT_OFFSET),
                rotate: 4.0,
                ..base
            },
            Some(Direction::South) => Self {
                offset: Vec2::new(0.0, -EXIT_OFFSET),
                rotate: -4.0,
                ..base
            },
            Some(Direction::West) => Self {
                offset: Vec2::new(EXIT_OFFSET, 0.0),
                rotate: 5.0,
                ..base
            },
            Some(Direction::East) => Self {
                offset: Vec2::new(-EXIT_OFFSET, 0.0),
                rotate: -5.0,
                ..base
            },
            None => Self {
                offset: Vec2::new(0.0, -30.0),
                ..base
            },
        }
    }
}

/// One rendered layer of the active stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSlot {
    /// Item id for the renderer's keyed diffing.
    pub id: String,
    /// Rest transform for this slot.
    pub transform: CardTransform,
    /// Live 3D lean, degrees; non-zero only on the interactive front card.
    pub tilt: Vec2,
    /// Whether this slot accepts pointer input.
    pub interactive: bool,
}

/// Directional glow for the live gesture, anchored at a compass edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowHint {
    /// Which edge the glow hugs.
    pub direction: Direction,
    /// Glow alpha in `[0.08, 0.3]`.
    pub alpha: f32,
    /// Anchor point as percentages of the card, `(x%, y%)`.
    pub anchor: (u8, u8),
}

impl GlowHint {
    /// Build the glow for a classified gesture, or `None` inside the dead
    /// zone.
    #[must_use]
    pub fn from_gesture(gesture: &GestureState) -> Option<Self> {
        let direction = gesture.direction?;
        let alpha = (0.08 + gesture.strength * 0.25).clamp(0.0, 0.3);
        let anchor = match direction {
            Direction::North => (50, 0),
            Direction::South => (50, 100),
            Direction::East => (100, 50),
            Direction::West => (0, 50),
        };
        Some(Self {
            direction,
            alpha,
            anchor,
        })
    }
}

/// Scale step between consecutive preview layers.
const PREVIEW_SCALE_STEP: f32 = 0.05;
/// Vertical offset step between consecutive preview layers, pixels.
const PREVIEW_OFFSET_STEP: f32 = 14.0;
/// Opacity step between consecutive preview layers.
const PREVIEW_OPACITY_STEP: f32 = 0.35;

/// Emit the render slots for the current stack, front first.
///
/// Slot 0 carries the live tilt and is the only interactive layer; deeper
/// slots shrink, fade, and drop behind in z-order.
#[must_use]
pub fn stack_slots(state: &GalleryState, gesture: &GestureState) -> Vec<StackSlot> {
    let depth = state.active().len();
    state
        .active()
        .iter()
        .enumerate()
        .map(|(i, art)| {
            let front = i == 0;
            let layer = i as f32;
            StackSlot {
                id: art.id.clone(),
                transform: CardTransform {
                    offset: Vec2::new(0.0, PREVIEW_OFFSET_STEP * layer),
                    scale: 1.0 - PREVIEW_SCALE_STEP * layer,
                    rotate: 0.0,
                    opacity: (1.0 - PREVIEW_OPACITY_STEP * layer).max(0.0),
                    z: (depth - i) as i32,
                },
                tilt: if front { gesture.tilt } else { Vec2::ZERO },
                interactive: front,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Artwork;
    use crate::stack::SelectionConfig;

    fn art(id: &str) -> Artwork {
        Artwork {
            id: id.to_owned(),
            title: id.to_uppercase(),
            image: format!("/art/{id}.webp"),
            faction: "crowns".to_owned(),
            description: String::new(),
            date: "2277.01".to_owned(),
        }
    }

    #[test]
    fn east_commit_discards_westward() {
        let exit = CardTransform::exit(Some(Direction::East));
        assert!(exit.offset.x < 0.0);
        assert_eq!(exit.opacity, 0.0);
        let enter = CardTransform::enter(Some(Direction::East));
        assert!(enter.offset.x > 0.0);
    }

    #[test]
    fn back_navigation_uses_vertical_variant() {
        assert_eq!(CardTransform::enter(None).offset, Vec2::new(0.0, 40.0));
        assert_eq!(CardTransform::exit(None).offset, Vec2::new(0.0, -30.0));
    }

    #[test]
    fn glow_tracks_strength_and_clamps() {
        let weak = GestureState {
            direction: Some(Direction::East),
            strength: 0.0,
            ..GestureState::NEUTRAL
        };
        assert_eq!(GlowHint::from_gesture(&weak).unwrap().alpha, 0.08);

        let strong = GestureState {
            direction: Some(Direction::North),
            strength: 1.0,
            ..GestureState::NEUTRAL
        };
        let hint = GlowHint::from_gesture(&strong).unwrap();
        assert_eq!(hint.alpha, 0.3);
        assert_eq!(hint.anchor, (50, 0));
    }

    #[test]
    fn no_glow_inside_dead_zone() {
        assert!(GlowHint::from_gesture(&GestureState::NEUTRAL).is_none());
    }

    #[test]
    fn only_front_slot_is_interactive_and_tilted() {
        let config = SelectionConfig {
            stack_depth: 3,
            ..SelectionConfig::default()
        };
        let state = GalleryState::new(vec![art("a"), art("b"), art("c")], config);
        let gesture = GestureState {
            tilt: Vec2::new(4.0, -2.0),
            ..GestureState::NEUTRAL
        };
        let slots = stack_slots(&state, &gesture);
        assert_eq!(slots.len(), 3);
        assert!(slots[0].interactive);
        assert_eq!(slots[0].tilt, Vec2::new(4.0, -2.0));
        assert!(!slots[1].interactive);
        assert_eq!(slots[1].tilt, Vec2::ZERO);
        assert!(slots[0].transform.z > slots[1].transform.z);
        assert!(slots[1].transform.scale > slots[2].transform.scale);
    }
}

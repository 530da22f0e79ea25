#![forbid(unsafe_code)]

//! Core: normalized pointer input, gesture tracking, and commit gating.
//!
//! # Role in SwipeDeck
//! `swipedeck-core` is the input layer. It converts raw pointer and drag
//! deltas into a normalized two-axis gesture with a discrete directional
//! classification, and decides when an interaction becomes a committed
//! navigation action.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical input events (move, leave, click, drag).
//! - **Direction**: dead-zone aware dominant-axis classification.
//! - **GestureTracker**: tilt/strength state, release and click commits,
//!   and the cooldown latch that serializes rapid commits.
//!
//! # How it fits in the system
//! The gallery crate (`swipedeck-gallery`) consumes committed
//! [`Direction`](direction::Direction) values and mutates its card stack;
//! the live [`GestureState`](tracker::GestureState) feeds the view-model so
//! the renderer can tilt and glow the active card. Nothing in this crate
//! draws pixels or touches content.

pub mod direction;
pub mod event;
pub mod geometry;
pub mod tracker;

pub use direction::Direction;
pub use event::PointerEvent;
pub use geometry::{Bounds, Vec2};
pub use tracker::{GestureConfig, GestureState, GestureTracker};

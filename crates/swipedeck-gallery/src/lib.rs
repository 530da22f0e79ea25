#![forbid(unsafe_code)]

//! Gallery: the card stack engine behind the swipe galleries and focus grids.
//!
//! # Role in SwipeDeck
//! This crate owns everything between a committed gesture and the next
//! render: the immutable item pool, the ordered active stack, the bounded
//! recency and back-navigation buffers, the randomized selection policy, and
//! the view-model (per-slot transform hints) a renderer consumes.
//!
//! # Primary responsibilities
//! - **Catalog**: read-only content records loaded once at startup.
//! - **GalleryState**: advance-on-commit and back-navigation, with the
//!   three-tier selection fallback that never starves.
//! - **View-model**: enter/exit/stack transforms and the directional glow.
//! - **FocusGrid**: the select/dim/panel state machine for card grids.
//!
//! # How it fits in the system
//! `swipedeck-core` produces committed [`Direction`](swipedeck_core::Direction)
//! values; this crate turns them into new stack states. Selection takes an
//! injected [`rand::Rng`] so behavior is reproducible under test. Rendering
//! and timers live elsewhere.

pub mod catalog;
pub mod focus;
pub mod history;
pub mod stack;
pub mod view;

pub use catalog::{Artwork, Catalog, CatalogError};
pub use focus::{FocusAction, FocusGrid, FocusPhase};
pub use history::{BackStack, RecentHistory};
pub use stack::{Advance, GalleryState, PickTier, SelectionConfig};
pub use view::{CardTransform, GlowHint, StackSlot, stack_slots};

#![forbid(unsafe_code)]

//! Runtime: cancellable timers and timed reveal sequences.
//!
//! # Role in SwipeDeck
//! Everything in the UI that "waits" — boot-line reveals, panel-open
//! delays, glitch decay ramps — is a timer-scheduled state transition. This
//! crate owns the one abstraction behind all of them: a [`Scheduler`] whose
//! timers are handles that are always cancelled on teardown, on every exit
//! path, including re-invocation before the previous cycle finished.
//!
//! # Primary responsibilities
//! - **Scheduler**: interval and one-shot timers delivering messages over a
//!   channel; explicit cancel, cancel-all, and cancel-on-drop.
//! - **BootSequence**: deterministic one-item-per-tick reveal stepper.
//!
//! # How it fits in the system
//! State machines elsewhere (`swipedeck-gallery::focus`, the console boot
//! transcript) return "schedule this" values; the application layer wires
//! them through a `Scheduler` and routes the resulting messages back into
//! the state machines.

pub mod boot;
pub mod scheduler;

pub use boot::BootSequence;
pub use scheduler::{Scheduler, TimerId};

#![forbid(unsafe_code)]

//! Extras: the archive console and animated text effects.
//!
//! # Role in SwipeDeck
//! Everything here is presentational garnish over the core engine: the
//! simulated archive terminal (a pure lookup-table interpreter with a
//! transcript and input history) and the character-level text effects
//! (decrypt reveal, glitch corruption) used by headings and captions.
//!
//! Both take injected randomness and advance on explicit ticks, so every
//! frame is reproducible under test; wall time only enters through the
//! scheduler intervals the application wires them to.

pub mod console;
pub mod text_effects;

pub use console::{Console, LineKind, TranscriptLine};
pub use text_effects::{DecryptReveal, GlitchMode, GlitchText};

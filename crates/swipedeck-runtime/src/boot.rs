#![forbid(unsafe_code)]

//! One-item-per-tick reveal stepper.
//!
//! Drives the terminal boot transcript (and anything else revealed line by
//! line): a fixed item list is stepped through at a configured cadence. The
//! stepper itself is pure — wall time enters only through the scheduler
//! interval the caller wires it to, so reveals are deterministic in tests.
//!
//! # Example
//! ```
//! use swipedeck_runtime::BootSequence;
//! use std::time::Duration;
//!
//! let mut boot = BootSequence::new(vec!["INIT", "LINK UP", "READY"]);
//! assert_eq!(boot.cadence(), Duration::from_millis(90));
//! assert_eq!(boot.tick(), Some(&"INIT"));
//! assert_eq!(boot.tick(), Some(&"LINK UP"));
//! assert_eq!(boot.tick(), Some(&"READY"));
//! assert!(boot.is_complete());
//! assert_eq!(boot.tick(), None);
//! ```

use std::time::Duration;

/// Default reveal cadence between items.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(90);

/// A fixed sequence revealed one item per tick.
#[derive(Debug, Clone)]
pub struct BootSequence<T> {
    items: Vec<T>,
    next: usize,
    cadence: Duration,
}

impl<T> BootSequence<T> {
    /// Create a sequence with the default cadence.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_cadence(items, DEFAULT_CADENCE)
    }

    /// Create a sequence with an explicit cadence.
    #[must_use]
    pub fn with_cadence(items: Vec<T>, cadence: Duration) -> Self {
        Self {
            items,
            next: 0,
            cadence,
        }
    }

    /// The interval at which the caller should schedule ticks.
    #[must_use]
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Reveal the next item, or `None` once the sequence has run out.
    ///
    /// A `None` return is the caller's cue to cancel the driving interval.
    pub fn tick(&mut self) -> Option<&T> {
        let item = self.items.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    /// Item at a tick index, for callers that drive by tick count instead
    /// of consuming the stepper.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.items.get(i))
    }

    /// Number of items already revealed.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.next
    }

    /// Whether every item has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next >= self.items.len()
    }

    /// Rewind to the beginning (a re-mount restarts the reveal).
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

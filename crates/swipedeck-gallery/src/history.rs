#![forbid(unsafe_code)]

//! Bounded recency and back-navigation buffers.
//!
//! Both buffers are most-recent-first and capacity-bounded. They differ in
//! what they store and how they evict:
//!
//! - [`RecentHistory`] holds item *ids* and deduplicates on push: pushing an
//!   id that is already present moves it to the front instead of growing the
//!   buffer.
//! - [`BackStack`] holds full items for backward navigation; pushing past
//!   capacity evicts the oldest entry.
//!
//! # Invariants
//!
//! 1. `RecentHistory` never contains duplicate ids.
//! 2. Neither buffer exceeds its capacity after any operation sequence.

use std::collections::VecDeque;

use crate::catalog::Artwork;

/// Default capacity for both buffers.
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded dedup FIFO of item ids, most-recent-first.
///
/// Used to bias selection away from recently shown items.
#[derive(Debug, Clone, Default)]
pub struct RecentHistory {
    ids: VecDeque<String>,
    capacity: usize,
}

impl RecentHistory {
    /// Create an empty history with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty history with an explicit capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Front-insert an id, removing any prior occurrence, then truncate.
    pub fn push(&mut self, id: &str) {
        self.ids.retain(|seen| seen != id);
        self.ids.push_front(id.to_owned());
        self.ids.truncate(self.capacity);
    }

    /// Whether the id was seen recently.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|seen| seen == id)
    }

    /// Ids, most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of remembered ids.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been remembered yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The configured capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Bounded stack of previously displayed items, most-recent-first.
#[derive(Debug, Clone, Default)]
pub struct BackStack {
    items: VecDeque<Artwork>,
    capacity: usize,
}

impl BackStack {
    /// Create an empty back stack with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty back stack with an explicit capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Front-insert an item, evicting the oldest entry past capacity.
    pub fn push(&mut self, item: Artwork) {
        self.items.push_front(item);
        self.items.truncate(self.capacity);
    }

    /// Take the entry at `index`, discarding all more-recent entries.
    ///
    /// After this call the stack holds only the entries that were *older*
    /// than `index`. Returns `None` (stack untouched) if out of range.
    pub fn take_from(&mut self, index: usize) -> Option<Artwork> {
        if index >= self.items.len() {
            return None;
        }
        // Drop the more-recent prefix, then pop the selected entry.
        self.items.drain(..index);
        self.items.pop_front()
    }

    /// Entry at `index` without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.items.get(index)
    }

    /// Items, most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.items.iter()
    }

    /// Number of stored entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing to navigate back to.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#![forbid(unsafe_code)]

//! The stack engine: advance-on-commit and back-navigation.
//!
//! [`GalleryState`] owns one gallery instance's mutable state: the active
//! stack (front item interactive, the rest preview layers), the recency
//! buffer, and the back stack. A committed [`Direction`] drives
//! [`advance`](GalleryState::advance); the trace log's backtrack buttons
//! drive [`go_back`](GalleryState::go_back).
//!
//! # Selection policy
//!
//! Replacement picks cascade through three tiers so selection never starves:
//!
//! 1. **Fresh**: pool minus recent ids, the outgoing item, and everything
//!    still visible in the stack.
//! 2. **Not-outgoing**: recency ignored, but the outgoing item and items
//!    still visible stay excluded so the stack never shows duplicates.
//! 3. **Outgoing itself**: reached only when the pool is no larger than the
//!    stack depth; the outgoing item returns.
//!
//! Within a tier the pick is uniform random from the injected rng.
//!
//! # Invariants
//!
//! 1. Active stack ids are pairwise distinct.
//! 2. `advance` returns a pick whenever the pool is non-empty.
//! 3. `|active| == min(stack_depth, |pool|)` after every operation.
//! 4. With `pool.len() <= stack_depth` variety is impossible; repeats are
//!    accepted behavior, not an error.

use ahash::AHashSet;
use rand::Rng;
use swipedeck_core::Direction;
use tracing::debug;

use crate::catalog::{Artwork, Catalog};
use crate::history::{BackStack, RecentHistory};

/// Stack sizing and history bounds.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Target visible stack depth. Clamped to `1..=3` at construction.
    pub stack_depth: usize,
    /// Recency buffer capacity.
    pub history_cap: usize,
    /// Back stack capacity.
    pub back_cap: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            stack_depth: 1,
            history_cap: 20,
            back_cap: 20,
        }
    }
}

/// Which fallback tier produced a replacement pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTier {
    /// Unblocked candidate from the pool.
    Fresh,
    /// Recency exhausted the pool; anything not visible and not outgoing.
    NotOutgoing,
    /// Pool no larger than the stack; the outgoing item returns.
    OutgoingItself,
}

/// Result of a committed advance, for the renderer's transition animation.
#[derive(Debug, Clone)]
pub struct Advance {
    /// The item that left the front of the stack.
    pub outgoing: Artwork,
    /// The replacement appended to the back of the stack.
    pub picked: Artwork,
    /// The committed swipe direction.
    pub direction: Direction,
    /// Fallback tier that produced the pick.
    pub tier: PickTier,
}

/// Mutable state for one gallery instance.
///
/// Instances are independent: nothing here is shared across galleries, and
/// everything is discarded on teardown.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pool: Vec<Artwork>,
    active: Vec<Artwork>,
    recent: RecentHistory,
    back: BackStack,
    stack_depth: usize,
    last_direction: Option<Direction>,
}

impl GalleryState {
    /// Create a gallery over `pool` with the given configuration.
    ///
    /// The initial active stack is the first `min(stack_depth, pool.len())`
    /// items in authored order; the front id seeds the recency buffer. An
    /// empty pool yields a state whose [`current`](Self::current) is `None`
    /// and on which every operation is a no-op.
    #[must_use]
    pub fn new(pool: Vec<Artwork>, config: SelectionConfig) -> Self {
        let stack_depth = config.stack_depth.clamp(1, 3);
        let active: Vec<Artwork> = pool.iter().take(stack_depth).cloned().collect();
        let mut recent = RecentHistory::with_capacity(config.history_cap);
        if let Some(front) = active.first() {
            recent.push(&front.id);
        }
        Self {
            pool,
            active,
            recent,
            back: BackStack::with_capacity(config.back_cap),
            stack_depth,
            last_direction: None,
        }
    }

    /// Create a gallery over a catalog's full item set.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, config: SelectionConfig) -> Self {
        Self::new(catalog.artworks.clone(), config)
    }

    /// The visible/topmost, interactive item.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&Artwork> {
        self.active.first()
    }

    /// The full active stack, front first.
    #[inline]
    #[must_use]
    pub fn active(&self) -> &[Artwork] {
        &self.active
    }

    /// Non-interactive preview layers behind the front card.
    #[must_use]
    pub fn previews(&self) -> &[Artwork] {
        self.active.get(1..).unwrap_or_default()
    }

    /// The recency buffer.
    #[inline]
    #[must_use]
    pub fn recent(&self) -> &RecentHistory {
        &self.recent
    }

    /// The back-navigation stack.
    #[inline]
    #[must_use]
    pub fn back(&self) -> &BackStack {
        &self.back
    }

    /// Direction of the last committed advance, `None` after back-navigation.
    #[inline]
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Target visible stack depth.
    #[inline]
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack_depth
    }

    /// Advance the stack after a committed gesture.
    ///
    /// Pops the front item, picks a replacement through the fallback
    /// cascade, appends it, and updates both history buffers. Returns `None`
    /// only when the pool is empty (nothing to advance).
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Option<Advance> {
        if self.active.is_empty() {
            debug!("advance on empty gallery ignored");
            return None;
        }
        let outgoing = self.active.remove(0);
        let (picked, tier) = self.pick_replacement(&outgoing, rng);
        debug!(
            outgoing = %outgoing.id,
            picked = %picked.id,
            ?direction,
            ?tier,
            "stack advanced"
        );

        self.active.push(picked.clone());
        self.active.truncate(self.stack_depth);

        // Most-recent-first: outgoing ahead of the fresh pick.
        self.recent.push(&picked.id);
        self.recent.push(&outgoing.id);
        self.back.push(outgoing.clone());
        self.last_direction = Some(direction);

        Some(Advance {
            outgoing,
            picked,
            direction,
            tier,
        })
    }

    /// Navigate back to the entry at `index` in the back stack.
    ///
    /// Entries more recent than `index` are discarded; the remaining back
    /// stack holds only the older entries. The active stack is rebuilt from
    /// the selected item, preview slots refilled by the usual selection
    /// policy. Returns the new front item, or `None` if `index` is out of
    /// range.
    pub fn go_back<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Option<&Artwork> {
        let picked = self.back.take_from(index)?;
        debug!(target_id = %picked.id, index, "back-navigation");

        self.recent.push(&picked.id);
        self.active.clear();
        self.active.push(picked);
        self.refill_previews(rng);
        self.last_direction = None;
        self.active.first()
    }

    /// Fill preview slots up to the stack depth, avoiding recent ids and
    /// items already visible.
    fn refill_previews<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.active.len() < self.stack_depth.min(self.pool.len()) {
            let visible: AHashSet<&str> =
                self.active.iter().map(|a| a.id.as_str()).collect();
            let fresh: Vec<&Artwork> = self
                .pool
                .iter()
                .filter(|a| !visible.contains(a.id.as_str()) && !self.recent.contains(&a.id))
                .collect();
            let candidates: Vec<&Artwork> = if fresh.is_empty() {
                self.pool
                    .iter()
                    .filter(|a| !visible.contains(a.id.as_str()))
                    .collect()
            } else {
                fresh
            };
            let Some(pick) = uniform_pick(&candidates, rng) else {
                break;
            };
            self.active.push((*pick).clone());
        }
    }

    /// Three-tier replacement pick; see the module docs for the cascade.
    fn pick_replacement<R: Rng + ?Sized>(
        &self,
        outgoing: &Artwork,
        rng: &mut R,
    ) -> (Artwork, PickTier) {
        let mut blocked: AHashSet<&str> = self.recent.iter().collect();
        blocked.insert(&outgoing.id);
        for visible in &self.active {
            blocked.insert(&visible.id);
        }

        let fresh: Vec<&Artwork> = self
            .pool
            .iter()
            .filter(|a| !blocked.contains(a.id.as_str()))
            .collect();
        if let Some(pick) = uniform_pick(&fresh, rng) {
            return ((*pick).clone(), PickTier::Fresh);
        }

        // Recency no longer blocks, but visible items must: a preview card
        // becoming its own duplicate is worse than an early repeat.
        let visible: AHashSet<&str> = self.active.iter().map(|a| a.id.as_str()).collect();
        let not_outgoing: Vec<&Artwork> = self
            .pool
            .iter()
            .filter(|a| a.id != outgoing.id && !visible.contains(a.id.as_str()))
            .collect();
        if let Some(pick) = uniform_pick(&not_outgoing, rng) {
            return ((*pick).clone(), PickTier::NotOutgoing);
        }

        (outgoing.clone(), PickTier::OutgoingItself)
    }
}

/// Uniform random pick from a candidate slice.
fn uniform_pick<'a, R: Rng + ?Sized>(
    candidates: &[&'a Artwork],
    rng: &mut R,
) -> Option<&'a Artwork> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

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

    fn pool(ids: &[&str]) -> Vec<Artwork> {
        ids.iter().map(|id| art(id)).collect()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn new_seeds_recent_with_front_id() {
        let g = GalleryState::new(pool(&["a", "b", "c"]), SelectionConfig::default());
        assert_eq!(g.current().unwrap().id, "a");
        assert!(g.recent().contains("a"));
        assert_eq!(g.active().len(), 1);
    }

    #[test]
    fn empty_pool_is_inert() {
        let mut g = GalleryState::new(Vec::new(), SelectionConfig::default());
        let mut r = rng();
        assert!(g.current().is_none());
        assert!(g.advance(Direction::East, &mut r).is_none());
        assert!(g.go_back(0, &mut r).is_none());
    }

    #[test]
    fn advance_never_repeats_with_two_items() {
        // Pool = [A, B], depth 1: every advance must land on the other item.
        let mut g = GalleryState::new(pool(&["a", "b"]), SelectionConfig::default());
        let mut r = rng();
        for _ in 0..10 {
            let before = g.current().unwrap().id.clone();
            let adv = g.advance(Direction::West, &mut r).unwrap();
            assert_eq!(adv.outgoing.id, before);
            assert_ne!(g.current().unwrap().id, before);
        }
    }

    #[test]
    fn single_item_pool_falls_back_to_outgoing() {
        let mut g = GalleryState::new(pool(&["solo"]), SelectionConfig::default());
        let mut r = rng();
        let adv = g.advance(Direction::North, &mut r).unwrap();
        assert_eq!(adv.tier, PickTier::OutgoingItself);
        assert_eq!(g.current().unwrap().id, "solo");
    }

    #[test]
    fn three_commits_build_most_recent_first_history() {
        let mut g = GalleryState::new(pool(&["a", "b", "c", "d", "e"]), SelectionConfig::default());
        let mut r = rng();
        let mut outgoing = Vec::new();
        for _ in 0..3 {
            outgoing.push(g.advance(Direction::East, &mut r).unwrap().outgoing.id);
        }
        assert_eq!(outgoing[0], "a");
        let recent: Vec<_> = g.recent().iter().map(str::to_owned).collect();
        // Each outgoing id appears exactly once, newest first.
        for id in &outgoing {
            assert_eq!(recent.iter().filter(|r| *r == id).count(), 1);
        }
        assert_eq!(&recent[0], outgoing.last().unwrap());
        assert!(recent.contains(&"a".to_owned()));
    }

    #[test]
    fn back_stack_records_outgoing_items() {
        let mut g = GalleryState::new(pool(&["a", "b", "c"]), SelectionConfig::default());
        let mut r = rng();
        g.advance(Direction::South, &mut r).unwrap();
        assert_eq!(g.back().get(0).unwrap().id, "a");
    }

    #[test]
    fn go_back_restores_entry_and_truncates() {
        let mut g = GalleryState::new(pool(&["a", "b", "c", "d", "e"]), SelectionConfig::default());
        let mut r = rng();
        for _ in 0..3 {
            g.advance(Direction::East, &mut r).unwrap();
        }
        // Back stack is [third-outgoing, second-outgoing, "a"].
        let target = g.back().get(1).unwrap().id.clone();
        let oldest = g.back().get(2).unwrap().id.clone();
        let front = g.go_back(1, &mut r).unwrap().id.clone();
        assert_eq!(front, target);
        let remaining: Vec<_> = g.back().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(remaining, [oldest.as_str()]);
        assert_eq!(g.last_direction(), None);
    }

    #[test]
    fn depth_three_keeps_visible_ids_distinct() {
        let config = SelectionConfig {
            stack_depth: 3,
            ..SelectionConfig::default()
        };
        let mut g = GalleryState::new(pool(&["a", "b", "c", "d", "e", "f"]), config);
        let mut r = rng();
        assert_eq!(g.active().len(), 3);
        for _ in 0..30 {
            g.advance(Direction::East, &mut r).unwrap();
            let ids: Vec<_> = g.active().iter().map(|a| a.id.as_str()).collect();
            let mut dedup = ids.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(ids.len(), dedup.len(), "duplicate visible ids: {ids:?}");
            assert_eq!(ids.len(), 3);
        }
    }

    #[test]
    fn stack_depth_is_clamped() {
        let config = SelectionConfig {
            stack_depth: 9,
            ..SelectionConfig::default()
        };
        let g = GalleryState::new(pool(&["a", "b", "c", "d"]), config);
        assert_eq!(g.stack_depth(), 3);
    }
}

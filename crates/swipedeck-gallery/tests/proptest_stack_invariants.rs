//! Property tests for the stack engine's reachable-state invariants:
//! visible ids stay pairwise distinct, history buffers stay bounded, and
//! the selection cascade never starves while the pool is non-empty.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use swipedeck_core::Direction;
use swipedeck_gallery::{Artwork, GalleryState, SelectionConfig};

fn art(id: usize) -> Artwork {
    Artwork {
        id: format!("item-{id}"),
        title: format!("ITEM {id}"),
        image: format!("/art/{id}.webp"),
        faction: "crowns".to_owned(),
        description: String::new(),
        date: "2277.01".to_owned(),
    }
}

fn direction(code: u8) -> Direction {
    match code % 4 {
        0 => Direction::North,
        1 => Direction::South,
        2 => Direction::East,
        _ => Direction::West,
    }
}

fn assert_distinct_ids(state: &GalleryState) {
    let ids: Vec<&str> = state.active().iter().map(|a| a.id.as_str()).collect();
    let mut dedup = ids.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(ids.len(), dedup.len(), "duplicate visible ids: {ids:?}");
}

proptest! {
    #[test]
    fn advance_preserves_invariants(
        pool_size in 1usize..8,
        depth in 1usize..=3,
        seed in any::<u64>(),
        commits in proptest::collection::vec(any::<u8>(), 1..60),
    ) {
        let pool: Vec<Artwork> = (0..pool_size).map(art).collect();
        let config = SelectionConfig { stack_depth: depth, ..SelectionConfig::default() };
        let mut state = GalleryState::new(pool, config);
        let mut rng = SmallRng::seed_from_u64(seed);

        for code in commits {
            let advance = state.advance(direction(code), &mut rng);
            // Fallback completeness: a non-empty pool always yields a pick.
            prop_assert!(advance.is_some());

            assert_distinct_ids(&state);
            prop_assert_eq!(state.active().len(), depth.min(pool_size));
            prop_assert!(state.recent().len() <= state.recent().capacity());
            prop_assert!(state.back().len() <= 20);
        }
    }

    #[test]
    fn go_back_preserves_invariants(
        pool_size in 2usize..8,
        depth in 1usize..=3,
        seed in any::<u64>(),
        back_index in any::<usize>(),
    ) {
        let pool: Vec<Artwork> = (0..pool_size).map(art).collect();
        let config = SelectionConfig { stack_depth: depth, ..SelectionConfig::default() };
        let mut state = GalleryState::new(pool, config);
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..6 {
            state.advance(Direction::East, &mut rng);
        }

        let len_before = state.back().len();
        if len_before == 0 {
            return Ok(());
        }
        let index = back_index % len_before;
        let target = state.back().get(index).unwrap().id.clone();

        let front = state.go_back(index, &mut rng).unwrap().id.clone();
        prop_assert_eq!(front, target);
        prop_assert_eq!(state.back().len(), len_before - index - 1);
        assert_distinct_ids(&state);
        prop_assert_eq!(state.active().len(), depth.min(pool_size));
    }

    #[test]
    fn two_item_pool_always_alternates(
        seed in any::<u64>(),
        commits in proptest::collection::vec(any::<u8>(), 1..40),
    ) {
        let pool = vec![art(0), art(1)];
        let mut state = GalleryState::new(pool, SelectionConfig::default());
        let mut rng = SmallRng::seed_from_u64(seed);

        for code in commits {
            let before = state.current().unwrap().id.clone();
            state.advance(direction(code), &mut rng).unwrap();
            prop_assert_ne!(state.current().unwrap().id.clone(), before);
        }
    }
}

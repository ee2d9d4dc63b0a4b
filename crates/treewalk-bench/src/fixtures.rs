//! Workload fixtures
//!
//! The perfect trees the harness measures are the easy case for a counter;
//! these generators grow irregular trees with a known node count so the
//! counting paths can be exercised off the happy path.

use rand::Rng;

use treewalk_core::Tree;

/// Grow an irregular tree. Below `max_depth`, each child exists with
/// probability `keep`. Returns the tree together with its node count as
/// tallied during growth.
pub fn ragged_tree<R: Rng>(rng: &mut R, max_depth: u32, keep: f64) -> (Tree, u64) {
    if max_depth == 0 {
        return (Tree::empty(), 0);
    }
    let (right, right_nodes) = if rng.gen_bool(keep) {
        ragged_tree(rng, max_depth - 1, keep)
    } else {
        (Tree::empty(), 0)
    };
    let (left, left_nodes) = if rng.gen_bool(keep) {
        ragged_tree(rng, max_depth - 1, keep)
    } else {
        (Tree::empty(), 0)
    };
    (Tree::graft(left, right), 1 + left_nodes + right_nodes)
}

/// A degenerate tree: a single right-leaning spine of `len` nodes
pub fn spine(len: u32) -> (Tree, u64) {
    let mut tree = Tree::empty();
    for _ in 0..len {
        tree = Tree::graft(Tree::empty(), tree);
    }
    (tree, len as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use treewalk_core::{ArenaTree, CountMode};

    #[test]
    fn test_ragged_tally_matches_counter() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (tree, tallied) = ragged_tree(&mut rng, 10, 0.7);
            assert_eq!(tree.count(), tallied);
        }
    }

    #[test]
    fn test_spine_counts_its_length() {
        let (tree, tallied) = spine(200);
        assert_eq!(tree.count(), 200);
        assert_eq!(tallied, 200);
        assert_eq!(tree.count_with(CountMode::WorkStack), 200);
    }

    proptest! {
        #[test]
        fn prop_all_counters_agree_on_ragged_trees(seed in any::<u64>(), depth in 1u32..=10) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (tree, tallied) = ragged_tree(&mut rng, depth, 0.6);
            let arena = ArenaTree::from_tree(&tree).unwrap();

            prop_assert_eq!(tree.count(), tallied);
            prop_assert_eq!(tree.count_with(CountMode::WorkStack), tallied);
            prop_assert_eq!(arena.count(), tallied);
            prop_assert_eq!(arena.count_with(CountMode::WorkStack), tallied);
        }
    }
}

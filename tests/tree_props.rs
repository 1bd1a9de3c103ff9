//! Property tests: every insertion sequence yields a valid AVL tree

use proptest::prelude::*;
use sylvan::AvlTree;

mod common;
use common::assert_avl;

proptest! {
    #[test]
    fn order_and_balance_hold(keys in proptest::collection::vec(-1000i64..1000, 0..200)) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        assert_avl(&tree);
        prop_assert!(tree.check_invariants().is_ok());

        let mut sorted = keys.clone();
        sorted.sort();
        let in_order: Vec<i64> = tree.iter().copied().collect();
        prop_assert_eq!(in_order, sorted);
    }

    #[test]
    fn duplicates_keep_balance(keys in proptest::collection::vec(0i64..4, 1..120)) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        assert_avl(&tree);
        prop_assert!(tree.check_invariants().is_ok());
        prop_assert_eq!(tree.len(), keys.len());
    }

    #[test]
    fn height_is_logarithmic(keys in proptest::collection::vec(any::<i32>(), 1..500)) {
        let tree: AvlTree<i32> = keys.iter().copied().collect();
        let n = tree.len() as f64;
        let node_height = (tree.height() + 1) as f64;
        prop_assert!(
            node_height <= 1.4405 * (n + 2.0).log2(),
            "height {} too large for {} nodes", node_height, n
        );
    }

    #[test]
    fn sums_agree_with_input(keys in proptest::collection::vec(-10_000i64..10_000, 0..200)) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        let expected: i64 = keys.iter().sum();
        prop_assert_eq!(tree.sum_values(), expected);
        prop_assert_eq!(tree.sum_values_iterative(), expected);
    }

    #[test]
    fn min_is_smallest_input(keys in proptest::collection::vec(any::<i64>(), 0..100)) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        prop_assert_eq!(tree.find_min(), keys.iter().min());
    }

    #[test]
    fn size_and_positions_cover_every_node(keys in proptest::collection::vec(0u16..500, 0..150)) {
        let tree: AvlTree<u16> = keys.iter().copied().collect();
        prop_assert_eq!(tree.size(), keys.len());

        let layout = tree.positions();
        prop_assert_eq!(layout.len(), keys.len());
        for (rank, pos) in layout.iter().enumerate() {
            prop_assert_eq!(pos.x, rank);
            prop_assert!(pos.y <= 0 && -pos.y <= tree.height());
        }
        let layout_keys: Vec<u16> = layout.iter().map(|p| *p.key).collect();
        let iter_keys: Vec<u16> = tree.iter().copied().collect();
        prop_assert_eq!(layout_keys, iter_keys);
    }
}

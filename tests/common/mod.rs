#![allow(dead_code)]

use sylvan::{AvlTree, Node};

/// Walk the tree through its public accessors and check every structural
/// invariant independently of `AvlTree::check_invariants`.
pub fn assert_avl<K: Ord + std::fmt::Debug>(tree: &AvlTree<K>) {
    walk(tree.root());
    let keys: Vec<&K> = tree.iter().collect();
    assert!(
        keys.windows(2).all(|pair| pair[0] <= pair[1]),
        "in-order keys not sorted: {:?}",
        keys
    );
    assert_eq!(keys.len(), tree.len(), "iterator skipped nodes");
}

fn walk<K: Ord + std::fmt::Debug>(node: Option<&Node<K>>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let left = walk(node.left());
    let right = walk(node.right());
    assert_eq!(
        node.height(),
        1 + left.max(right),
        "stale cached height at {:?}",
        node.key()
    );
    assert!(
        left.abs_diff(right) <= 1,
        "unbalanced at {:?}: left {} right {}",
        node.key(),
        left,
        right
    );
    node.height()
}

/// Cheapest total cost over every possible merge order.
pub fn brute_force_cost(weights: &[u64]) -> u64 {
    if weights.len() < 2 {
        return 0;
    }
    let mut best = u64::MAX;
    for i in 0..weights.len() {
        for j in (i + 1)..weights.len() {
            let combined = weights[i] + weights[j];
            let mut rest: Vec<u64> = weights
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &w)| w)
                .collect();
            rest.push(combined);
            best = best.min(combined + brute_force_cost(&rest));
        }
    }
    best
}

//! Self-balancing (AVL) binary search tree
//!
//! Invariants kept after every insertion:
//!   height(n) = 1 + max(height(n.left), height(n.right)), absent = 0
//!   |height(n.left) - height(n.right)| ≤ 1
//!   in-order keys are non-decreasing; equal keys are routed right
//!
//! No deletion: nodes live until the tree is dropped.

mod display;
mod node;
mod traversal;

use std::fmt;
use std::ops::Add;

use tracing::debug;

use crate::SylvanError;

pub use display::{render_outline, write_outline};
pub use node::{insert, insert_counted, link_height, rotate_left, rotate_right, Link, Node, RotationStats};
pub use traversal::{count, edge_height, positions, sum_iterative, sum_recursive, Iter, Position};

/// Owning handle for an AVL tree.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
    rotations: RotationStats,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: RotationStats::default(),
        }
    }
}

impl<K> AvlTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node, `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of keys inserted so far (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node count by walking the tree. Always equals [`AvlTree::len`].
    pub fn size(&self) -> usize {
        count(self.root())
    }

    /// Longest root-to-leaf path counted in edges; `-1` when empty.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |root| root.height() as isize - 1)
    }

    /// Rebalancing events performed over the lifetime of this tree.
    pub fn rotations(&self) -> RotationStats {
        self.rotations
    }

    /// Smallest key: the end of the left spine.
    pub fn find_min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.key())
    }

    /// [`AvlTree::find_min`] for callers that want to propagate with `?`.
    pub fn require_min(&self) -> Result<&K, SylvanError> {
        self.find_min().ok_or(SylvanError::EmptyTree)
    }

    /// Keys in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// In-order display coordinates for every node.
    pub fn positions(&self) -> Vec<Position<'_, K>> {
        positions(self.root())
    }

    /// Layout entry of the minimum key, i.e. the node a renderer highlights.
    pub fn min_position(&self) -> Option<Position<'_, K>> {
        // leftmost node is always the first in-order entry
        self.positions().into_iter().next()
    }

    /// Pre-order outline, see [`render_outline`].
    pub fn outline(&self) -> String
    where
        K: fmt::Display,
    {
        render_outline(self.root())
    }
}

impl<K: Ord> AvlTree<K> {
    /// Insert `key`, rebalancing on the way back up. Never fails.
    pub fn insert(&mut self, key: K) {
        let before = self.rotations;
        self.root = Some(insert_counted(self.root.take(), key, &mut self.rotations));
        self.len += 1;
        if self.rotations != before {
            debug!(
                len = self.len,
                rotations = self.rotations.total(),
                "rebalanced after insert"
            );
        }
    }

    /// Verify cached heights, AVL balance and key order for every node.
    pub fn check_invariants(&self) -> Result<(), SylvanError> {
        fn check<'a, K: Ord>(
            node: Option<&'a Node<K>>,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
        ) -> Result<usize, SylvanError> {
            let Some(node) = node else {
                return Ok(0);
            };
            if lower.is_some_and(|lower| node.key() < lower) || upper.is_some_and(|upper| node.key() > upper) {
                return Err(SylvanError::InvariantViolated(
                    "key out of order with an ancestor".to_string(),
                ));
            }
            let left = check(node.left(), lower, Some(node.key()))?;
            let right = check(node.right(), Some(node.key()), upper)?;
            if node.height() != 1 + left.max(right) {
                return Err(SylvanError::InvariantViolated(format!(
                    "cached height {} but children give {}",
                    node.height(),
                    1 + left.max(right)
                )));
            }
            if left.abs_diff(right) > 1 {
                return Err(SylvanError::InvariantViolated(format!(
                    "balance factor {} out of range",
                    left as isize - right as isize
                )));
            }
            Ok(node.height())
        }

        check(self.root(), None, None).map(|_| ())
    }
}

impl<K> AvlTree<K>
where
    K: Copy + Add<Output = K> + Default,
{
    /// Sum of all keys, recursive traversal. Empty tree sums to zero.
    pub fn sum_values(&self) -> K {
        sum_recursive(self.root())
    }

    /// Sum of all keys with an explicit stack. Same result as [`AvlTree::sum_values`].
    pub fn sum_values_iterative(&self) -> K {
        sum_iterative(self.root())
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outline(f, self.root())
    }
}

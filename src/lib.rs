//! # Sylvan: balanced search tree and greedy merge planner
//!
//! Two independent components:
//!
//! 1. **AVL tree** ([`tree`]): ordered insertion with automatic rebalancing,
//!    minimum lookup, sum of keys (recursive and iterative), and an in-order
//!    layout pass that renderers consume as `(key, x, y)` entries.
//! 2. **Merge planner** ([`merge`]): repeatedly joins the two cheapest items
//!    from a min-heap, yielding the minimum total combination cost and the
//!    ordered log of merges.
//!
//! ## Usage Example
//!
//! ```
//! use sylvan::{min_merge_cost, AvlTree};
//!
//! let tree: AvlTree<i64> = [10, 20, 30].into_iter().collect();
//! assert_eq!(tree.root().map(|n| *n.key()), Some(20));
//! assert_eq!(tree.find_min(), Some(&10));
//! assert_eq!(tree.sum_values(), 60);
//!
//! let plan = min_merge_cost([8u64, 4, 6, 12, 10]);
//! assert_eq!(plan.total_cost, 90);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config; // Demo configuration
pub mod merge; // Greedy pairwise merge
pub mod sample; // Random demo keys
pub mod tree; // AVL tree

// Re-exports for convenience
pub use config::DemoConfig;
pub use merge::{min_merge_cost, MergePlan, MergeStep};
pub use tree::{AvlTree, Node, Position, RotationStats};

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Insertion, summation and merge planning are total and never produce one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SylvanError {
    /// Minimum requested from a tree with no nodes
    #[error("tree is empty")]
    EmptyTree,

    /// More distinct keys requested than the range holds
    #[error("cannot draw {requested} distinct keys from a range of {available}")]
    SampleTooLarge {
        /// Keys requested
        requested: usize,
        /// Distinct values in the range
        available: usize,
    },

    /// Range with `low >= high`
    #[error("invalid key range [{low}, {high})")]
    InvalidRange {
        /// Inclusive lower bound
        low: i64,
        /// Exclusive upper bound
        high: i64,
    },

    /// Structural check failed
    #[error("tree invariant violated: {0}")]
    InvariantViolated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SylvanError::EmptyTree.to_string(), "tree is empty");
        assert_eq!(
            SylvanError::InvalidRange { low: 5, high: 1 }.to_string(),
            "invalid key range [5, 1)"
        );
        assert_eq!(
            SylvanError::SampleTooLarge {
                requested: 3,
                available: 2
            }
            .to_string(),
            "cannot draw 3 distinct keys from a range of 2"
        );
    }
}

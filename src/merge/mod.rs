//! Greedy minimum-cost pairwise merge
//!
//! Combining two items costs their sum, and the combined item goes back
//! into the pool. Always joining the two cheapest available items is optimal
//! (same exchange argument as Huffman coding).
//!
//! Cost of n items: Σ over n-1 merges of (a + b).

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Add;

use tracing::debug;

/// One combination: the two smallest items and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeStep<W> {
    /// Smaller of the two extracted weights
    pub a: W,
    /// Larger (or equal) of the two extracted weights
    pub b: W,
    /// `a + b`, pushed back into the pool
    pub combined: W,
}

/// Result of planning: total cost plus the ordered merge log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct MergePlan<W> {
    /// Sum of every intermediate `combined` value
    pub total_cost: W,
    /// Merges in the order they were performed
    pub steps: Vec<MergeStep<W>>,
}

impl<W: Copy> MergePlan<W> {
    /// Weight of the single item left at the end, `None` if nothing was merged.
    pub fn final_weight(&self) -> Option<W> {
        self.steps.last().map(|step| step.combined)
    }

    /// Number of merges performed
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the input had fewer than two items.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Plan the cheapest sequence of pairwise merges for `weights`.
///
/// Weights are expected to be non-negative; order of the input is irrelevant.
/// Fewer than two weights produce a zero cost and no steps. Ties are broken
/// by the heap's own ordering.
pub fn min_merge_cost<W, I>(weights: I) -> MergePlan<W>
where
    W: Ord + Copy + Add<Output = W> + Default,
    I: IntoIterator<Item = W>,
{
    let mut heap: BinaryHeap<Reverse<W>> = weights.into_iter().map(Reverse).collect();
    let mut total_cost = W::default();
    let mut steps = Vec::with_capacity(heap.len().saturating_sub(1));

    while heap.len() > 1 {
        let (Some(Reverse(a)), Some(Reverse(b))) = (heap.pop(), heap.pop()) else {
            break;
        };
        let combined = a + b;
        total_cost = total_cost + combined;
        steps.push(MergeStep { a, b, combined });
        heap.push(Reverse(combined));
    }

    debug!(merges = steps.len(), "merge plan complete");

    MergePlan { total_cost, steps }
}

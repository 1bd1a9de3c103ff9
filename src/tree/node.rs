//! AVL node and the recursive insertion algorithm
//!
//! Each node owns its children outright. Insertion consumes a subtree and
//! hands back its (possibly rotated) replacement, which the caller puts
//! back into the child slot it came from.
//!
//! Rebalancing cases at an overweight node `n`, inserted key `k`:
//!   LL: bf > 1,  k <  n.left.key   → rotate_right(n)
//!   RR: bf < -1, k >= n.right.key  → rotate_left(n)
//!   LR: bf > 1,  k >= n.left.key   → rotate_left(n.left), rotate_right(n)
//!   RL: bf < -1, k <  n.right.key  → rotate_right(n.right), rotate_left(n)

use tracing::trace;

/// Owned, possibly-absent subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// One key of an AVL tree together with its cached subtree height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Fresh leaf: height 1, no children.
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Key stored at this node
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached height of the subtree rooted here (a leaf has height 1).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Left child: keys that sort at or before this one.
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right child: keys that sort at or after this one.
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`
    #[inline]
    pub fn balance_factor(&self) -> isize {
        link_height(&self.left) as isize - link_height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }
}

/// Height of a subtree, 0 when absent.
#[inline]
pub fn link_height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Counters for the rebalancing events performed during insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationStats {
    /// Single right rotations (LL case).
    pub single_right: usize,
    /// Single left rotations (RR case).
    pub single_left: usize,
    /// Left-right double rotations (LR case).
    pub left_right: usize,
    /// Right-left double rotations (RL case).
    pub right_left: usize,
}

impl RotationStats {
    /// Number of rebalancing events, counting a double rotation once.
    pub fn total(&self) -> usize {
        self.single_right + self.single_left + self.left_right + self.right_left
    }

    /// Number of double rotations (LR + RL).
    pub fn doubles(&self) -> usize {
        self.left_right + self.right_left
    }
}

/// Promote the left child of `y` to subtree root.
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
///
/// A node without a left child is returned unchanged.
pub fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Promote the right child of `x` to subtree root. Mirror of [`rotate_right`].
pub fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Insert `key` under `root` and return the new subtree root.
///
/// Equal keys are routed right, so the tree behaves as a multiset. A key equal
/// to the near child counts as having gone right of it when picking a rotation.
pub fn insert<K: Ord>(root: Link<K>, key: K) -> Box<Node<K>> {
    insert_counted(root, key, &mut RotationStats::default())
}

/// [`insert`], recording every rebalancing event into `stats`.
pub fn insert_counted<K: Ord>(root: Link<K>, key: K, stats: &mut RotationStats) -> Box<Node<K>> {
    let Some(mut node) = root else {
        return Box::new(Node::leaf(key));
    };

    // Which side of the near child the key travels to. Taken before descending:
    // if the child subtree rotates, its height is restored and this node stays
    // balanced, so the pre-descent child is the one that matters.
    let went_left = key < node.key;
    if went_left {
        let grand_left = node.left.as_ref().map(|child| key < child.key);
        node.left = Some(insert_counted(node.left.take(), key, stats));
        node.update_height();
        if node.balance_factor() > 1 {
            return match grand_left {
                Some(true) => {
                    trace!("LL case: single right rotation");
                    stats.single_right += 1;
                    rotate_right(node)
                }
                Some(false) => {
                    trace!("LR case: left-right double rotation");
                    stats.left_right += 1;
                    node.left = node.left.take().map(rotate_left);
                    rotate_right(node)
                }
                None => node,
            };
        }
    } else {
        let grand_left = node.right.as_ref().map(|child| key < child.key);
        node.right = Some(insert_counted(node.right.take(), key, stats));
        node.update_height();
        if node.balance_factor() < -1 {
            return match grand_left {
                Some(false) => {
                    trace!("RR case: single left rotation");
                    stats.single_left += 1;
                    rotate_left(node)
                }
                Some(true) => {
                    trace!("RL case: right-left double rotation");
                    stats.right_left += 1;
                    node.right = node.right.take().map(rotate_right);
                    rotate_left(node)
                }
                None => node,
            };
        }
    }

    node
}

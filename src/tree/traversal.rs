//! Read-only traversals over an AVL subtree
//!
//! In-order iteration, the two summation strategies, and the layout pass
//! a renderer consumes. None of these touch the tree shape.

use std::ops::Add;

use super::Node;

/// Horizontal/vertical placement of a single key for display.
///
/// `x` is the key's in-order rank (0-based, strictly increasing left to
/// right), `y` is the negated depth (root at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Position<'a, K> {
    /// Key at this node
    pub key: &'a K,
    /// In-order index
    pub x: usize,
    /// `-depth`
    pub y: isize,
}

/// In-order iterator over the keys of a subtree.
///
/// Stack depth is bounded by the tree height.
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// Sum of every key, by recursion (key + left + right).
pub fn sum_recursive<K>(node: Option<&Node<K>>) -> K
where
    K: Copy + Add<Output = K> + Default,
{
    match node {
        None => K::default(),
        Some(node) => *node.key() + sum_recursive(node.left()) + sum_recursive(node.right()),
    }
}

/// Sum of every key using an explicit stack instead of the call stack.
///
/// Pops a node, adds it, then pushes its left and right children.
pub fn sum_iterative<K>(root: Option<&Node<K>>) -> K
where
    K: Copy + Add<Output = K> + Default,
{
    let mut total = K::default();
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        total = total + *node.key();
        stack.extend(node.left());
        stack.extend(node.right());
    }
    total
}

/// Assign display coordinates to every node in in-order sequence.
pub fn positions<K>(root: Option<&Node<K>>) -> Vec<Position<'_, K>> {
    fn visit<'a, K>(node: Option<&'a Node<K>>, depth: usize, out: &mut Vec<Position<'a, K>>) {
        let Some(node) = node else {
            return;
        };
        visit(node.left(), depth + 1, out);
        out.push(Position {
            key: node.key(),
            x: out.len(),
            y: -(depth as isize),
        });
        visit(node.right(), depth + 1, out);
    }

    let mut out = Vec::new();
    visit(root, 0, &mut out);
    out
}

/// Number of nodes, counted recursively.
pub fn count<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| 1 + count(node.left()) + count(node.right()))
}

/// Longest root-to-leaf path in edges, `-1` for an empty subtree.
pub fn edge_height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, |node| 1 + edge_height(node.left()).max(edge_height(node.right())))
}

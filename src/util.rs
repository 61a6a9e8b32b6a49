//! Read-only tree walks shared by [`avl`][crate::avl] and [`unbalanced`][crate::unbalanced].
//!
//! Every walk here keeps its own stack of borrowed nodes rather than recursing, so an unbalanced
//! tree shaped like a list can be searched and traversed without running out of call stack.

use std::cmp::Ordering;

/// Borrowing access to a binary tree vertex. Both trees' nodes implement this so the search and
/// traversal code only exists once.
pub(crate) trait BinaryNode {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Walks down from `node` comparing against `value` until it finds an equal node or runs off the
/// bottom of the tree.
pub(crate) fn find<'a, N>(mut node: Option<&'a N>, value: &N::Value) -> Option<&'a N>
where
    N: BinaryNode,
    N::Value: Ord,
{
    while let Some(n) = node {
        node = match value.cmp(n.value()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(n),
            Ordering::Greater => n.right(),
        };
    }

    None
}

/// The smallest node of the subtree rooted at `node`.
pub(crate) fn leftmost<N: BinaryNode>(mut node: &N) -> &N {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

/// The largest node of the subtree rooted at `node`.
pub(crate) fn rightmost<N: BinaryNode>(mut node: &N) -> &N {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// Visits the root, then the left subtree, then the right subtree.
pub(crate) fn pre_order<N: BinaryNode>(root: Option<&N>, mut visit: impl FnMut(&N::Value)) {
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(node.value());
        // Right goes on first so the left subtree is popped (and visited) first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Visits the left subtree, then the right subtree, then the root.
///
/// This collects nodes in root, right, left order and then visits them backwards which is exactly
/// left, right, root.
pub(crate) fn post_order<N: BinaryNode>(root: Option<&N>, mut visit: impl FnMut(&N::Value)) {
    let mut stack: Vec<&N> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    for node in reversed.into_iter().rev() {
        visit(node.value());
    }
}

/// An in-order (ascending) walk over a tree. It holds the path of nodes whose value hasn't been
/// yielded yet, so it uses `O(height)` memory.
pub(crate) struct InOrder<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

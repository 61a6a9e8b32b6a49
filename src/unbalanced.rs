//! A plain Binary Search Tree that never rebalances. Its shape depends entirely on the order
//! values are inserted in, so inserting in ascending order builds what is effectively a linked
//! list. It exists alongside [`avl`][crate::avl] as the baseline the balanced tree is compared to.
//!
//! Because the height can be as large as the number of values, every operation here walks the
//! tree with a loop instead of recursing, and dropping the tree takes its nodes apart one at a
//! time.
//!
//! # Examples
//!
//! ```
//! use adt::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert_many([1, 3, 2, 4]);
//!
//! //   1
//! //    \
//! //     3
//! //    / \
//! //   2   4
//! tree.remove(&3);
//!
//! // 3's successor, 4, takes its place and adopts 2.
//! let right = tree.root().unwrap().right().unwrap();
//! assert_eq!(right.value(), &4);
//! assert_eq!(right.left().map(|n| *n.value()), Some(2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::util::{self, BinaryNode, InOrder};

type Subtree<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of distinct values with no balancing.
pub struct Tree<T> {
    root: Subtree<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Rebuilds the tree by inserting values in pre-order, which reproduces the exact same shape.
impl<T: Ord + Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.pre_order(|v| {
            tree.insert(v.clone());
        });
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if an equal
    /// value is already stored.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Inserts every value yielded by `values`, in order.
    pub fn insert_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Removes the value equal to `value` from the tree and returns it. If the tree doesn't
    /// contain such a value, nothing happens and `None` is returned.
    ///
    /// A node with two children keeps its place in the tree and takes the value of its in-order
    /// successor, whose own node is unlinked instead.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = value.cmp(&slot.as_ref()?.value);
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => &mut slot.as_mut()?.right,
            };
        }

        let mut node = slot.take()?;
        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => node.value,
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                node.value
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                let successor =
                    take_min(&mut node.right).expect("Two children => right subtree");
                let removed = std::mem::replace(&mut node.value, successor);
                *slot = Some(node);
                removed
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Returns whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        util::find(self.root(), value).is_some()
    }

    /// Calls `visit` with every value in ascending order.
    pub fn in_order(&self, mut visit: impl FnMut(&T)) {
        self.iter().for_each(|v| visit(v));
    }

    /// Calls `visit` with every value, visiting each node before its left and then its right
    /// subtree.
    pub fn pre_order(&self, visit: impl FnMut(&T)) {
        util::pre_order(self.root(), visit);
    }

    /// Calls `visit` with every value, visiting each node after its left and then its right
    /// subtree.
    pub fn post_order(&self, visit: impl FnMut(&T)) {
        util::post_order(self.root(), visit);
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root()))
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|n| util::leftmost(n).value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|n| util::rightmost(n).value())
    }

    /// The root of the tree, for inspecting its shape.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels of nodes the tree has. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // Dropping the root directly would recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

/// Unlinks the leftmost node below `slot`, putting its right child in its place, and returns its
/// value.
fn take_min<T>(mut slot: &mut Subtree<T>) -> Option<T> {
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }

    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min.value)
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_many(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`Tree`] in ascending order. See [`Tree::iter`].
pub struct Iter<'a, T>(InOrder<'a, Node<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// A vertex of an unbalanced [`Tree`].
pub struct Node<T> {
    value: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> BinaryNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all less than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all greater than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

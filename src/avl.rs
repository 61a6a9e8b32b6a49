//! A self-balancing Binary Search Tree (an AVL tree, to be precise) that owns its nodes outright.
//!
//! Every node owns its two children through `Box`es and there are no parent pointers. Inserting
//! and removing recurse down to the affected node and, on the way back up, each call recomputes
//! the height of its node, rebalances it and hands the (possibly new) subtree root back to its
//! caller which links it in where the old one was.
//!
//! # Examples
//!
//! ```
//! use adt::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting in ascending order would make a plain BST into a list. This one rebalances.
//! tree.insert_many([1, 2, 3]);
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), &2);
//! assert_eq!(root.height(), 2);
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! // Removing hands back the stored value, removing again does nothing.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.remove(&2), None);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::util::{self, BinaryNode, InOrder};

/// The largest difference in height allowed between the two subtrees of any node before it is
/// rebalanced.
pub const ALLOWED_IMBALANCE: isize = 1;

type Subtree<T> = Option<Box<Node<T>>>;

/// Height of a possibly absent subtree. An absent subtree has a height of 0.
fn height<T>(subtree: &Subtree<T>) -> usize {
    subtree.as_ref().map_or(0, |n| n.height)
}

/// A self-balancing Binary Search Tree of distinct values.
pub struct Tree<T> {
    root: Subtree<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
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

    /// Inserts `value` into the tree. Returns `false` and leaves the tree untouched if an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = match self.root.take() {
            Some(root) => root.insert(value),
            None => (Node::new_boxed(value), true),
        };
        self.root = Some(root);

        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Inserts every value yielded by `values`, in order. Equivalent to calling
    /// [`insert`][Tree::insert] for each of them.
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
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// // The root has two children so its successor, 3, takes its place.
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    ///
    /// assert_eq!(tree.remove(&42), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = match self.root.take() {
            Some(root) => root.remove(value),
            None => (None, None),
        };
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Returns whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
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
        height(&self.root)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
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

/// A vertex of a [`Tree`]. It owns the subtrees on either side of it and remembers how tall the
/// subtree rooted at it is.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Subtree<T>,
    right: Subtree<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
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
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
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

    /// How many levels are in the subtree rooted at this node. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    /// Inserts `value` into the subtree rooted at `self`. Returns the new root of the subtree and
    /// whether anything was inserted.
    fn insert(mut self: Box<Self>, value: T) -> (Box<Self>, bool)
    where
        T: Ord,
    {
        let inserted = match value.cmp(&self.value) {
            Ordering::Less => {
                let (left, inserted) = match self.left.take() {
                    Some(left) => left.insert(value),
                    None => (Self::new_boxed(value), true),
                };
                self.left = Some(left);
                inserted
            }
            Ordering::Equal => false,
            Ordering::Greater => {
                let (right, inserted) = match self.right.take() {
                    Some(right) => right.insert(value),
                    None => (Self::new_boxed(value), true),
                };
                self.right = Some(right);
                inserted
            }
        };

        (self.balance(), inserted)
    }

    /// Removes `value` from the subtree rooted at `self`. Returns what is left of the subtree
    /// and the removed value, if there was one.
    fn remove(mut self: Box<Self>, value: &T) -> (Subtree<T>, Option<T>)
    where
        T: Ord,
    {
        let removed = match value.cmp(&self.value) {
            Ordering::Less => {
                let Some(left) = self.left.take() else {
                    return (Some(self), None);
                };
                let (left, removed) = left.remove(value);
                self.left = left;
                removed
            }
            Ordering::Greater => {
                let Some(right) = self.right.take() else {
                    return (Some(self), None);
                };
                let (right, removed) = right.remove(value);
                self.right = right;
                removed
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => return (None, Some(self.value)),
                // A lone child is already balanced and has a correct height.
                (Some(child), None) | (None, Some(child)) => return (Some(child), Some(self.value)),

                // With two children, the smallest value of the right subtree (the in-order
                // successor) replaces ours. Its node is then removed from the right subtree.
                (Some(left), Some(right)) => {
                    let (successor, right) = right.remove_min();
                    self.left = Some(left);
                    self.right = right;
                    Some(mem::replace(&mut self.value, successor))
                }
            },
        };

        (Some(self.balance()), removed)
    }

    /// Removes the leftmost node of the subtree rooted at `self`. Returns its value and what is
    /// left of the subtree. The leftmost node has no left child so it is always replaced by its
    /// right child, if any.
    fn remove_min(mut self: Box<Self>) -> (T, Subtree<T>) {
        match self.left.take() {
            None => (self.value, self.right),
            Some(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                (min, Some(self.balance()))
            }
        }
    }

    /// Recomputes this node's height and, if its subtrees differ in height by more than
    /// [`ALLOWED_IMBALANCE`], rotates it. Returns the root of the rebalanced subtree.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();

        let factor = self.balance_factor();
        let node = if factor > ALLOWED_IMBALANCE {
            let right = self
                .right
                .as_ref()
                .expect("Right heavy => right child");
            if height(&right.right) >= height(&right.left) {
                self.rotate_left()
            } else {
                self.rotate_right_left()
            }
        } else if factor < -ALLOWED_IMBALANCE {
            let left = self.left.as_ref().expect("Left heavy => left child");
            if height(&left.left) >= height(&left.right) {
                self.rotate_right()
            } else {
                self.rotate_left_right()
            }
        } else {
            self
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= ALLOWED_IMBALANCE as usize);
        }
        node
    }

    /// Rotate self to the left. This moves the right child up vertically and self down
    /// vertically. Used to rebalance the tree when the right child is too tall.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root                      new_root
    ///    /    \                        /    \
    ///   x   new_root    rotate ->  old_root  z
    ///        /  \                   /  \
    ///       y    z                 x    y
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        log::trace!("rotating left, subtree height {}", self.height);

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Rotate self to the right. This is the mirror image of [`rotate_left`][Self::rotate_left]:
    /// the left child moves up and its right subtree becomes self's left subtree.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        log::trace!("rotating right, subtree height {}", self.height);

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Used when the right child is too tall because of its left subtree.
    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        let right = self.right.take().expect("Rotate right-left => right child");
        self.right = Some(right.rotate_right());
        self.rotate_left()
    }

    /// Used when the left child is too tall because of its right subtree.
    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        let left = self.left.take().expect("Rotate left-right => left child");
        self.left = Some(left.rotate_left());
        self.rotate_right()
    }
}

#[cfg(test)]
impl<T: Ord> Tree<T> {
    /// Walks the whole tree checking ordering, heights, balance and the length.
    pub(crate) fn assert_invariants(&self) {
        fn check<T: Ord>(node: &Node<T>, lower: Option<&T>, upper: Option<&T>) -> usize {
            if let Some(lower) = lower {
                assert!(node.value > *lower);
            }
            if let Some(upper) = upper {
                assert!(node.value < *upper);
            }

            let left = node.left().map_or(0, |l| check(l, lower, Some(&node.value)));
            let right = node.right().map_or(0, |r| check(r, Some(&node.value), upper));

            assert_eq!(node.height, left.max(right) + 1);
            assert!(left.abs_diff(right) <= 1);
            node.height
        }

        if let Some(root) = self.root() {
            check(root, None, None);
        }
        assert_eq!(self.iter().count(), self.len);
    }
}

//! This crate exposes a self-balancing Binary Search Tree along with the
//! handful of simpler collections that usually come up next to it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The [`unbalanced`]
//! tree makes no effort to limit its height, so inserting values in sorted order
//! makes it as tall as it has values. The [`avl`] tree additionally keeps, for
//! every `Node`, the heights of its two subtrees within one of each other by
//! rotating `Node`s after every insert and delete, which limits its height to
//! `O(lg N)` where `N` is the number of nodes in the tree. Both trees naturally
//! support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! ## Other collections
//!
//! - [`linked_list`]: a doubly linked list with constant time access to both ends.
//! - [`stack`] and [`queue`]: thin adapters over the linked list.
//! - [`vector`]: a growable array with an observable, doubling capacity.
//!
//! Operations that can't be carried out, like popping an empty stack or reading
//! past the end of a vector, return an [`Error`]. Inserting a value a tree
//! already holds, or removing one it doesn't, simply does nothing.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod unbalanced;
pub mod vector;

mod util;


pub use error::{Error, Result};

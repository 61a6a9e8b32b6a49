//! A doubly linked list with constant time access to both ends. It backs [`Stack`] and
//! [`Queue`].
//!
//! Nodes are allocated with `Box` and leaked into raw pointers so each node can be pointed at by
//! both of its neighbours. The list is the only owner of its nodes and frees them when they are
//! popped or when it is dropped.
//!
//! [`Stack`]: crate::stack::Stack
//! [`Queue`]: crate::queue::Queue
//!
//! # Examples
//!
//! ```
//! use adt::linked_list::LinkedList;
//! use adt::Error;
//!
//! let mut list = LinkedList::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.peek_front(), Ok(&1));
//! assert_eq!(list.peek_back(), Ok(&3));
//!
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! assert_eq!(list.pop_front(), Ok(3));
//! assert_eq!(list.pop_back(), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_back(), Err(Error::Empty));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    prev: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next, prev })))
    }

    /// # Safety
    ///
    /// `node` must have been created by [`Node::new_leaked`] and must not be reachable from the
    /// list anymore, so that nothing dereferences it after this.
    unsafe fn into_value(node: NonNull<Self>) -> T {
        Box::from_raw(node.as_ptr()).value
    }
}

/// A doubly linked list.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // We own `Box<Node<T>>`s even though we only hold pointers to them.
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// How many values are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, None, self.head);
        match self.head {
            // SAFETY: `head` is a live node owned by this list and no other reference to it
            // exists while we hold `&mut self`.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds `value` after the current tail.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, self.tail, None);
        match self.tail {
            // SAFETY: See `push_front`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the head of the list.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or_else(empty)?;

        // SAFETY: `head` is a live node owned by this list. Once `self.head` and the new head's
        // `prev` stop pointing at it, nothing else can reach it so it is safe to free.
        unsafe {
            self.head = head.as_ref().next;
            match self.head {
                Some(mut new_head) => new_head.as_mut().prev = None,
                None => self.tail = None,
            }
            self.len -= 1;
            Ok(Node::into_value(head))
        }
    }

    /// Removes and returns the tail of the list.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or_else(empty)?;

        // SAFETY: The mirror image of `pop_front`.
        unsafe {
            self.tail = tail.as_ref().prev;
            match self.tail {
                Some(mut new_tail) => new_tail.as_mut().next = None,
                None => self.head = None,
            }
            self.len -= 1;
            Ok(Node::into_value(tail))
        }
    }

    /// Borrows the head of the list.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn peek_front(&self) -> Result<&T> {
        let head = self.head.ok_or_else(empty)?;
        // SAFETY: `head` is live for as long as `self` is borrowed since only `&mut self` methods
        // free nodes.
        Ok(unsafe { &head.as_ref().value })
    }

    /// Borrows the tail of the list.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list is empty.
    pub fn peek_back(&self) -> Result<&T> {
        let tail = self.tail.ok_or_else(empty)?;
        // SAFETY: See `peek_front`.
        Ok(unsafe { &tail.as_ref().value })
    }

    /// Returns whether a value equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Reverses the order of the list in place.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(mut node) = current {
            // SAFETY: Every node reachable from `head` is live and owned by this list, and only
            // one of them is borrowed at a time.
            unsafe {
                let node = node.as_mut();
                std::mem::swap(&mut node.next, &mut node.prev);
                // What used to be `next` is now `prev`.
                current = node.prev;
            }
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns an iterator from the head to the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }
}

fn empty() -> Error {
    log::debug!("tried to take from an empty list");
    Error::Empty
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a [`LinkedList`] from head to tail. See [`LinkedList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The list is borrowed for `'a` so none of its nodes can be freed or mutated
        // while this iterator exists.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the links in both directions agree with each other and with `len`.
    fn assert_links<T: PartialEq + fmt::Debug>(list: &LinkedList<T>) {
        let mut forward = Vec::new();
        let mut current = list.head;
        while let Some(node) = current {
            let node = unsafe { node.as_ref() };
            forward.push(&node.value);
            current = node.next;
        }

        let mut backward = Vec::new();
        let mut current = list.tail;
        while let Some(node) = current {
            let node = unsafe { node.as_ref() };
            backward.push(&node.value);
            current = node.prev;
        }
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
        if let Some(head) = list.head {
            assert!(unsafe { head.as_ref() }.prev.is_none());
        }
        if let Some(tail) = list.tail {
            assert!(unsafe { tail.as_ref() }.next.is_none());
        }
    }

    #[test]
    fn starts_empty() {
        let list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.peek_front(), Err(Error::Empty));
        assert_eq!(list.peek_back(), Err(Error::Empty));
    }

    #[test]
    fn push_front_into_empty_list() {
        let mut list = LinkedList::new();
        list.push_front(1);

        assert_eq!(list.peek_front(), Ok(&1));
        assert_eq!(list.peek_back(), Ok(&1));
        assert_eq!(list.len(), 1);
        assert_links(&list);
    }

    #[test]
    fn push_front_links_old_head() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.peek_front(), Ok(&1));
        assert_eq!(list.peek_back(), Ok(&2));
        assert_eq!(list.len(), 2);
        assert_links(&list);
    }

    #[test]
    fn push_back_links_old_tail() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.peek_front(), Ok(&1));
        assert_eq!(list.peek_back(), Ok(&3));
        assert_eq!(list.len(), 3);
        assert_links(&list);
    }

    #[test]
    fn pop_from_empty_list() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));
    }

    #[test]
    fn pop_only_value() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(list.pop_front(), Ok(1));
        assert!(list.is_empty());
        assert!(list.tail.is_none());

        list.push_front(1);
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        assert!(list.head.is_none());
    }

    #[test]
    fn pop_from_both_ends() {
        let mut list: LinkedList<_> = (1..=4).collect();

        assert_eq!(list.pop_front(), Ok(1));
        assert_links(&list);
        assert_eq!(list.pop_back(), Ok(4));
        assert_links(&list);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn reverse() {
        let mut list: LinkedList<_> = (1..=5).collect();
        list.reverse();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
        assert_eq!(list.peek_front(), Ok(&5));
        assert_eq!(list.peek_back(), Ok(&1));
        assert_links(&list);

        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn contains_and_clear() {
        let mut list: LinkedList<_> = ["a", "b"].into_iter().collect();
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));

        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(&"a"));
    }

    #[test]
    fn clone_and_eq() {
        let list: LinkedList<_> = (0..3).map(|i| i.to_string()).collect();
        let copy = list.clone();

        assert_eq!(list, copy);
        assert_ne!(list, LinkedList::new());
        assert_eq!(format!("{:?}", copy), r#"["0", "1", "2"]"#);
    }
}

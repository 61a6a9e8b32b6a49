//! A last-in, first-out stack backed by a [`LinkedList`].

use crate::error::Result;
use crate::linked_list::LinkedList;

/// A last-in, first-out stack.
///
/// # Examples
///
/// ```
/// use adt::stack::Stack;
/// use adt::Error;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(Error::Empty));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`][crate::Error::Empty] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_back()
    }

    /// Borrows the value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`][crate::Error::Empty] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.list.peek_back()
    }

    /// How many values are on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

//! A first-in, first-out queue backed by a [`LinkedList`].

use crate::error::Result;
use crate::linked_list::LinkedList;

/// A first-in, first-out queue. Values join at the back and leave from the front.
///
/// # Examples
///
/// ```
/// use adt::queue::Queue;
/// use adt::Error;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Ok(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Err(Error::Empty));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`][crate::Error::Empty] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.pop_front()
    }

    /// Borrows the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`][crate::Error::Empty] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.list.peek_front()
    }

    /// How many values are waiting in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

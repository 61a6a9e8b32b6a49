//! A growable array that doubles its capacity whenever it runs out of room, giving amortized
//! constant time appends.
//!
//! Unlike `Vec`, the capacity is exact and observable: a new vector holds [`DEFAULT_CAPACITY`]
//! slots and the capacity only ever changes by a factor of [`GROWTH_FACTOR`].
//!
//! # Examples
//!
//! ```
//! use adt::vector::Vector;
//! use adt::Error;
//!
//! let mut vector = Vector::new();
//! vector.push_all([1, 2, 3]);
//!
//! assert_eq!(vector.get(0), Ok(&1));
//! assert_eq!(vector.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
//!
//! vector.set(0, 10).unwrap();
//! assert_eq!(vector.remove(1), Ok(2));
//! assert_eq!(vector.iter().copied().collect::<Vec<_>>(), [10, 3]);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// How many slots a vector starts with when none is specified.
pub const DEFAULT_CAPACITY: usize = 16;

/// How much the capacity is multiplied by when the vector is full.
pub const GROWTH_FACTOR: usize = 2;

/// A growable array with an observable capacity.
pub struct Vector<T> {
    // Slots `0..len` are `Some`, the rest are `None`. `slots.len()` is the capacity.
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The copy has the same capacity as the original.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

/// Vectors are equal when they hold equal values in the same order. Capacity is ignored.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Vector<T> {
    /// Creates an empty vector with room for [`DEFAULT_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty vector with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many values fit before the vector has to grow.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value`, doubling the capacity first if the vector is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Appends every value yielded by `values`, in order.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    /// Borrows the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is not less than [`len`][Vector::len].
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check(index)?;
        Ok(self.slot(index))
    }

    /// Mutably borrows the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is not less than [`len`][Vector::len].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check(index)?;
        Ok(self.slot_mut(index))
    }

    /// Replaces the value at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is not less than [`len`][Vector::len]. Use
    /// [`push`][Vector::push] to add new values.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    /// Removes the value at `index` and shifts everything after it one place to the left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index` is not less than [`len`][Vector::len].
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check(index)?;
        let removed = self.slots[index].take();
        // Move the now empty slot to the end of the populated range.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed.expect("Populated range => value"))
    }

    /// Removes every value. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.slots[..self.len].iter())
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            log::debug!("index {} out of bounds for length {}", index, self.len);
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    fn slot(&self, index: usize) -> &T {
        self.slots[index]
            .as_ref()
            .expect("Populated range => value")
    }

    fn slot_mut(&mut self, index: usize) -> &mut T {
        self.slots[index]
            .as_mut()
            .expect("Populated range => value")
    }

    fn grow(&mut self) {
        let capacity = match self.capacity() {
            0 => DEFAULT_CAPACITY,
            capacity => capacity * GROWTH_FACTOR,
        };

        let mut slots = empty_slots(capacity);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }
}

/// Panics if `index` is out of bounds, like indexing a slice. Use [`Vector::get`] to get an
/// [`Error`] instead.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        if let Err(e) = self.check(index) {
            panic!("{}", e);
        }
        self.slot(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        if let Err(e) = self.check(index) {
            panic!("{}", e);
        }
        self.slot_mut(index)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.push_all(iter);
        vector
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`Vector`]. See [`Vector::iter`].
pub struct Iter<'a, T>(std::slice::Iter<'a, Option<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        let vector: Vector<i32> = Vector::new();
        assert_eq!(vector.capacity(), DEFAULT_CAPACITY);
        assert_eq!(vector.len(), 0);
        assert!(vector.is_empty());
    }

    #[test]
    fn capacity_from_constructor() {
        let vector: Vector<i32> = Vector::with_capacity(3);
        assert_eq!(vector.capacity(), 3);
    }

    #[test]
    fn push_under_capacity_does_not_grow() {
        let mut vector = Vector::new();
        vector.push(1);

        assert_eq!(vector.len(), 1);
        assert_eq!(vector.capacity(), DEFAULT_CAPACITY);
        assert_eq!(vector[0], 1);
    }

    #[test]
    fn push_over_capacity_doubles() {
        let mut vector = Vector::new();
        vector.push_all(0..=DEFAULT_CAPACITY);

        assert_eq!(vector.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(vector.len(), DEFAULT_CAPACITY + 1);
        assert!(vector.iter().copied().eq(0..=DEFAULT_CAPACITY));
    }

    #[test]
    fn zero_capacity_grows_to_default() {
        let mut vector = Vector::with_capacity(0);
        vector.push('a');
        assert_eq!(vector.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn get_past_len() {
        let mut vector = Vector::new();
        vector.push(1);

        assert_eq!(vector.get(0), Ok(&1));
        assert_eq!(
            vector.get(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn set_replaces_but_does_not_append() {
        let mut vector: Vector<_> = [1, 2].into_iter().collect();

        assert_eq!(vector.set(1, 5), Ok(2));
        assert_eq!(vector[1], 5);
        assert_eq!(
            vector.set(2, 5),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn remove_shifts_tail() {
        let mut vector: Vector<_> = (0..5).collect();

        assert_eq!(vector.remove(1), Ok(1));
        assert_eq!(vector.len(), 4);
        assert_eq!(vector.iter().copied().collect::<Vec<_>>(), [0, 2, 3, 4]);
        assert!(vector.get(4).is_err());

        assert_eq!(vector.remove(3), Ok(4));
        assert!(vector.remove(3).is_err());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut vector: Vector<_> = (0..20).collect();
        vector.clear();

        assert_eq!(vector.len(), 0);
        assert_eq!(vector.capacity(), DEFAULT_CAPACITY * 2);
        assert_eq!(
            vector.get(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn equality_is_element_wise() {
        let first: Vector<_> = [1, 2, 3].into_iter().collect();
        let mut second = Vector::with_capacity(3);
        second.push_all([1, 2, 3]);
        assert_eq!(first, second);

        second.set(2, 4).unwrap();
        assert_ne!(first, second);

        second.remove(2).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn clone_keeps_values_and_capacity() {
        let vector: Vector<_> = ["a", "b"].into_iter().collect();
        let copy = vector.clone();

        assert_eq!(vector, copy);
        assert_eq!(copy.capacity(), vector.capacity());
        assert_eq!(format!("{:?}", copy), r#"["a", "b"]"#);
    }

    #[test]
    #[should_panic(expected = "index 0 out of bounds for length 0")]
    fn index_past_len_panics() {
        let vector: Vector<i32> = Vector::new();
        let _ = vector[0];
    }
}

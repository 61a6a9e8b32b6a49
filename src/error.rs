//! Errors signalled by the collections in this crate.
//!
//! Only boundary violations are errors. Inserting a duplicate into a tree or removing a value
//! that isn't there are not errors at all, and a broken internal invariant is a bug that panics.

/// A boundary violation reported by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value was popped or peeked from a collection with nothing in it.
    #[error("collection is empty")]
    Empty,
    /// An index outside the populated range was used.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// How many elements the collection held at the time.
        len: usize,
    },
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

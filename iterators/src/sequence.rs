//! This module defines the capabilities shared by all lists:
//!  * [`Sequence`] - indexed access and appending
//!  * [`Iterable`] - creation of a [`Cursor`] over the elements
//!
//! Both are implemented by [`crate::FixedList`], [`crate::LinkedList`] and
//! [`crate::ExtensibleList`]. [`Sequence`] is object safe, so lists of different kinds can be
//! driven through a `&mut dyn Sequence<T>`.
use crate::{cursor::Cursor, Result};

/// Indexed, append-only sequence of elements.
pub trait Sequence<T> {
    /// Get the element at position `index`.
    ///
    /// Fails with [`crate::Error::OutOfBounds`] if `index` is not smaller than [`Sequence::len`].
    fn get(&self, index: usize) -> Result<&T>;

    /// Append `elt` at the end of the sequence.
    ///
    /// Implementations with a bounded capacity may drop the element once they are full.
    fn add(&mut self, elt: T);

    /// Number of elements stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collection which can be walked element by element from the first to the last one.
pub trait Iterable<T> {
    type Iter<'a>: Cursor<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Create a cursor positioned before the first element.
    fn iter(&self) -> Self::Iter<'_>;
}

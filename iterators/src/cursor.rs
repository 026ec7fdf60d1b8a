//! This module defines the [`Cursor`] trait, the explicit form of an ongoing traversal.
//!
//! A cursor answers two questions: is there anything left ([`Cursor::has_next`]), and what is
//! it ([`Cursor::next_item`]). Callers are expected to check the former before asking for the
//! latter; asking anyway fails with [`crate::Error::Exhausted`].
//!
//! Every cursor of this crate is also a regular [`Iterator`] that yields `None` once the cursor
//! is exhausted, so `for` loops and iterator adapters work as usual.
//!
//! Cursors hold a shared borrow of the list they walk. The list therefore cannot be modified
//! while a cursor over it is alive.
use crate::Result;

/// Ongoing traversal of a list.
pub trait Cursor {
    type Item;

    /// Returns `true` if a subsequent call to [`Cursor::next_item`] will yield an element.
    fn has_next(&self) -> bool;

    /// Yield the next element and move past it.
    ///
    /// Fails with [`crate::Error::Exhausted`] when [`Cursor::has_next`] is `false`.
    fn next_item(&mut self) -> Result<Self::Item>;
}

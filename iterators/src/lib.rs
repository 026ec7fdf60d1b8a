//! This library provides three append-only lists and cursors to walk them.
//!
//! * [`FixedList`] stores its elements in storage of a fixed capacity and drops whatever does
//!   not fit. It can be walked forward ([`FixedList::iter`]) and backward
//!   ([`FixedList::reversed_iter`]).
//! * [`LinkedList`] chains its elements block after block. It grows without bounds and can be
//!   walked forward only.
//! * [`ExtensibleList`] chains [`FixedList`] blocks in a [`LinkedList`], combining unbounded
//!   growth with chunked storage.
//!
//! All of them implement the [`Sequence`] (see [`sequence`] module documentation) and
//! [`Iterable`] traits. Traversal goes through a [`Cursor`] (see [`cursor`] module
//! documentation), which is a plain [`Iterator`] as well.
//!
//! None of the lists is synchronised: sharing one between threads requires external locking.

pub mod cursor;
pub mod extensible;
pub mod fixed;
pub mod linked;
pub mod sequence;

mod error;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use extensible::ExtensibleList;
pub use fixed::FixedList;
pub use linked::LinkedList;
pub use sequence::{Iterable, Sequence};

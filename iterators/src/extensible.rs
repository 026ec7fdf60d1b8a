//! Unbounded list made of a chain of fixed-capacity blocks.
use std::{fmt, iter::FusedIterator};

use tracing::trace;

use crate::{
    cursor::Cursor,
    fixed::FixedList,
    linked::{self, BlockRef, LinkedList},
    sequence::{Iterable, Sequence},
    Error, Result,
};

/// List of unbounded length storing its elements in a [`LinkedList`] of [`FixedList`] blocks.
///
/// All blocks share the same capacity, chosen at construction. Elements fill the last block
/// until it is full, then a new block is allocated. Hence every block but the last one is full,
/// every block holds at least one element, and the element at index `i` sits in block
/// `i / block_capacity` at offset `i % block_capacity`.
#[derive(Clone)]
pub struct ExtensibleList<T> {
    blocks: LinkedList<FixedList<T>>,
    block_capacity: usize,
}

impl<T> ExtensibleList<T> {
    /// Create an empty list whose blocks hold `block_capacity` elements each.
    pub fn new(block_capacity: usize) -> Result<Self> {
        if block_capacity == 0 {
            return Err(Error::ZeroBlockCapacity);
        }

        Ok(Self {
            blocks: LinkedList::new(),
            block_capacity,
        })
    }

    /// Create a list whose blocks hold `block_capacity` elements each, filled with `items`.
    pub fn with_items<I>(block_capacity: usize, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(block_capacity)?;
        list.extend(items);
        Ok(list)
    }

    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn len(&self) -> usize {
        self.blocks.last().map_or(0, |last| {
            (self.blocks.len() - 1) * self.block_capacity + last.len()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append `elt` to the last block, allocating a new one if the last block is full.
    pub fn add(&mut self, elt: T) {
        if let Some(last) = self.blocks.last_mut().filter(|block| !block.is_full()) {
            last.add(elt);
            return;
        }

        let mut block = FixedList::new(self.block_capacity);
        block.add(elt);
        self.blocks.add(block);

        trace!(
            blocks = self.blocks.len(),
            block_capacity = self.block_capacity,
            "allocated a new block"
        );
    }

    /// Get the element at position `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }

        self.blocks
            .get(index / self.block_capacity)?
            .get(index % self.block_capacity)
    }

    /// Get a cursor walking the list from the first element to the last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            blocks: &self.blocks,
            current: self.blocks.first_block(),
            index: 0,
        }
    }

    /// Get an iterator over the blocks, from the first to the last.
    pub fn blocks(&self) -> linked::Iter<'_, FixedList<T>> {
        self.blocks.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtensibleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Sequence<T> for ExtensibleList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        ExtensibleList::get(self, index)
    }

    fn add(&mut self, elt: T) {
        ExtensibleList::add(self, elt)
    }

    fn len(&self) -> usize {
        ExtensibleList::len(self)
    }
}

impl<T> Iterable<T> for ExtensibleList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        ExtensibleList::iter(self)
    }
}

impl<T> Extend<T> for ExtensibleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.add(elt));
    }
}

impl<'a, T> IntoIterator for &'a ExtensibleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over an [`ExtensibleList`] from the first element to the last.
///
/// Walks the chain of blocks the way [`linked::Iter`] does, and the elements of the current
/// block the way [`crate::fixed::Ascending`] does. A cursor over an empty list is exhausted
/// from the start.
pub struct Iter<'a, T> {
    blocks: &'a LinkedList<FixedList<T>>,
    current: Option<BlockRef>,
    /// Offset within the current block of the element the next call yields.
    index: usize,
}

impl<'a, T> Cursor for Iter<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.current.map_or(false, |current| {
            let block = self.blocks.block(current);
            self.index < block.contents.len() || block.next.is_some()
        })
    }

    fn next_item(&mut self) -> Result<&'a T> {
        let mut current = self.current.ok_or(Error::Exhausted)?;

        if self.index >= self.blocks.block(current).contents.len() {
            current = self.blocks.block(current).next.ok_or(Error::Exhausted)?;
            self.current = Some(current);
            self.index = 0;
        }

        let elt = self.blocks.block(current).contents.get(self.index)?;
        self.index += 1;
        Ok(elt)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next_item().ok()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::ExtensibleList;
    use crate::{cursor::Cursor, fixed::FixedList, Error};

    const GUST: [&str; 7] = [
        "Furvent, ",
        "ceux ",
        "qui ",
        "vont ",
        "mûrir ",
        "te ",
        "saluent !",
    ];

    #[test]
    fn zero_block_capacity_is_rejected() {
        assert_eq!(
            ExtensibleList::<u8>::new(0).err(),
            Some(Error::ZeroBlockCapacity)
        );
    }

    #[test]
    fn elements_are_spread_over_blocks() {
        let list = ExtensibleList::with_items(3, GUST.iter().copied()).unwrap();

        assert_eq!(list.len(), 7);
        assert_eq!(list.block_count(), 3);
        assert_eq!(
            list.blocks().map(FixedList::len).collect::<Vec<_>>(),
            [3, 3, 1]
        );
        assert_eq!(list.get(5), Ok(&"te "));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), GUST);
    }

    #[test]
    fn new_block_starts_only_when_last_is_full() {
        let mut list = ExtensibleList::new(2).unwrap();

        list.add(1);
        assert_eq!(list.block_count(), 1);
        list.add(2);
        assert_eq!(list.block_count(), 1);
        list.add(3);
        assert_eq!(list.block_count(), 2);
    }

    #[test]
    fn huge_block_capacity_is_not_allocated_up_front() {
        let mut list = ExtensibleList::new(1 << 60).unwrap();

        list.add('a');
        list.add('b');

        assert_eq!(list.block_count(), 1);
        assert_eq!(list.get(1), Ok(&'b'));
    }

    #[test]
    fn get_past_the_end_fails() {
        let list = ExtensibleList::with_items(4, 0..5).unwrap();

        assert_eq!(list.get(4), Ok(&4));
        assert_eq!(list.get(5), Err(Error::OutOfBounds { index: 5, len: 5 }));
        assert_eq!(list.get(40), Err(Error::OutOfBounds { index: 40, len: 5 }));
    }

    #[test]
    fn cursor_over_empty_list_is_exhausted() {
        let list = ExtensibleList::<u8>::new(3).unwrap();

        let mut iter = list.iter();

        assert!(!iter.has_next());
        assert_eq!(iter.next_item(), Err(Error::Exhausted));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn cursor_rolls_over_full_blocks() {
        let list = ExtensibleList::with_items(3, 0..6).unwrap();

        let mut iter = list.iter();
        for expected in 0..3 {
            assert_eq!(iter.next_item(), Ok(&expected));
        }

        assert!(iter.has_next());
        for expected in 3..6 {
            assert_eq!(iter.next_item(), Ok(&expected));
        }

        assert!(!iter.has_next());
        assert_eq!(iter.next_item(), Err(Error::Exhausted));
    }

    #[test]
    fn debug_lists_the_elements() {
        let list = ExtensibleList::with_items(2, 1..=3).unwrap();

        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}

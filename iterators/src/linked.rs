//! Singly-linked list of blocks.
use std::{
    fmt,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    cursor::Cursor,
    sequence::{Iterable, Sequence},
    Error, Result,
};

/// Handle of a [`Block`] within the list that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockRef(usize);

/// Link of the chain: one element and the handle of its successor.
#[derive(Debug, Clone)]
pub(crate) struct Block<T> {
    pub contents: T,
    pub next: Option<BlockRef>,
}

/// Singly-linked, append-only list.
///
/// Each element lives in its own [`Block`] which links to the following one. The list keeps
/// track of both the first and the last block so that appending is `O(1)`, while indexed
/// access walks the chain and is `O(index)`.
///
/// Blocks are owned by the list itself and refer to each other by handle. They are never
/// freed before the list is.
///
/// The list can only be walked forward, see [`LinkedList::iter`].
#[derive(Clone)]
pub struct LinkedList<T> {
    blocks: Vec<Block<T>>,
    first: Option<BlockRef>,
    last: Option<BlockRef>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            first: None,
            last: None,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Append `elt` in a new block after the last one.
    pub fn add(&mut self, elt: T) {
        let block = BlockRef(self.blocks.len());
        self.blocks.push(Block {
            contents: elt,
            next: None,
        });

        match self.last {
            Some(last) => self.block_mut(last).next = Some(block),
            None => self.first = Some(block),
        }
        self.last = Some(block);
    }

    /// Get the element at position `index` by following `index` links from the first block.
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut current = self.first;
        let mut remaining = index;

        while let Some(block) = current.map(|b| self.block(b)) {
            if remaining == 0 {
                return Ok(&block.contents);
            }

            remaining -= 1;
            current = block.next;
        }

        Err(Error::OutOfBounds {
            index,
            len: self.len(),
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.first.map(|b| &self.block(b).contents)
    }

    pub fn last(&self) -> Option<&T> {
        self.last.map(|b| &self.block(b).contents)
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        let last = self.last?;
        Some(&mut self.block_mut(last).contents)
    }

    /// Get a cursor walking the list from the first element to the last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.first,
        }
    }

    pub(crate) fn first_block(&self) -> Option<BlockRef> {
        self.first
    }

    pub(crate) fn block(&self, block: BlockRef) -> &Block<T> {
        &self.blocks[block.0]
    }

    fn block_mut(&mut self, block: BlockRef) -> &mut Block<T> {
        &mut self.blocks[block.0]
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn add(&mut self, elt: T) {
        LinkedList::add(self, elt)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Iterable<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.add(elt));
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`LinkedList`] from the first element to the last.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    /// Block holding the element the next call yields, `None` once the chain is walked.
    current: Option<BlockRef>,
}

impl<'a, T> Cursor for Iter<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.current.is_some()
    }

    fn next_item(&mut self) -> Result<&'a T> {
        let block = self.list.block(self.current.ok_or(Error::Exhausted)?);
        self.current = block.next;
        Ok(&block.contents)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next_item().ok()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

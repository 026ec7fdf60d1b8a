//! Array-backed list with a capacity fixed at construction.
use std::iter::{FromIterator, FusedIterator};

use tracing::trace;

use crate::{
    cursor::Cursor,
    sequence::{Iterable, Sequence},
    Error, Result,
};

/// List backed by storage of a fixed capacity.
///
/// Storage grows with the elements and never past `capacity`, so a large capacity costs nothing
/// until it is used. Elements are appended one after another until the capacity is reached;
/// from that point on
/// [`FixedList::add`] drops whatever it is given. Running out of room is not an error.
///
/// The list can be walked in both directions, see [`FixedList::iter`] and
/// [`FixedList::reversed_iter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedList<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<T> FixedList<T> {
    /// Create an empty list able to hold `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            elements: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` once no more elements can be added.
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// Get the element at position `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Append `elt` if there is room left, drop it otherwise.
    pub fn add(&mut self, elt: T) {
        self.try_add(elt);
    }

    /// Append `elt` if there is room left.
    ///
    /// Returns `false` if the list was full and the element was dropped.
    pub fn try_add(&mut self, elt: T) -> bool {
        if self.is_full() {
            trace!(capacity = self.capacity, "list is full, dropping an element");
            return false;
        }

        self.elements.push(elt);
        true
    }

    /// Get a cursor walking the list from the first element to the last.
    pub fn iter(&self) -> Ascending<'_, T> {
        Ascending {
            list: self,
            current: 0,
        }
    }

    /// Get a cursor walking the list from the last element to the first.
    pub fn reversed_iter(&self) -> Descending<'_, T> {
        Descending {
            list: self,
            current: self.len(),
        }
    }
}

impl<T> Sequence<T> for FixedList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        FixedList::get(self, index)
    }

    fn add(&mut self, elt: T) {
        FixedList::add(self, elt)
    }

    fn len(&self) -> usize {
        FixedList::len(self)
    }
}

impl<T> Iterable<T> for FixedList<T> {
    type Iter<'a> = Ascending<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        FixedList::iter(self)
    }
}

/// The capacity of the collected list is the number of collected elements.
impl<T> FromIterator<T> for FixedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements = iter.into_iter().collect::<Vec<_>>();

        Self {
            capacity: elements.len(),
            elements,
        }
    }
}

impl<T> Extend<T> for FixedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.add(elt));
    }
}

impl<'a, T> IntoIterator for &'a FixedList<T> {
    type Item = &'a T;
    type IntoIter = Ascending<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`FixedList`] from the first element to the last.
pub struct Ascending<'a, T> {
    list: &'a FixedList<T>,
    /// Position of the element the next call yields.
    current: usize,
}

impl<'a, T> Cursor for Ascending<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.current < self.list.len()
    }

    fn next_item(&mut self) -> Result<&'a T> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }

        let elt = self.list.get(self.current)?;
        self.current += 1;
        Ok(elt)
    }
}

impl<'a, T> Iterator for Ascending<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Ascending<'_, T> {}

impl<T> FusedIterator for Ascending<'_, T> {}

/// Cursor over a [`FixedList`] from the last element to the first.
pub struct Descending<'a, T> {
    list: &'a FixedList<T>,
    /// One past the position of the element the next call yields.
    current: usize,
}

impl<'a, T> Cursor for Descending<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.current > 0
    }

    fn next_item(&mut self) -> Result<&'a T> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }

        self.current -= 1;
        self.list.get(self.current)
    }
}

impl<'a, T> Iterator for Descending<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl<T> ExactSizeIterator for Descending<'_, T> {}

impl<T> FusedIterator for Descending<'_, T> {}

#[cfg(test)]
mod tests {
    use super::FixedList;
    use crate::{cursor::Cursor, Error};

    #[test]
    fn added_elements_are_gettable() {
        let mut list = FixedList::new(4);

        list.add(10);
        list.add(20);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(1), Ok(&20));
    }

    #[test]
    fn elements_past_capacity_are_dropped() {
        let mut list = FixedList::new(3);

        ["a", "b", "c", "d"].iter().for_each(|&elt| list.add(elt));

        assert_eq!(list.len(), 3);
        assert!(list.is_full());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(
            list.reversed_iter().copied().collect::<Vec<_>>(),
            ["c", "b", "a"]
        );
    }

    #[test]
    fn huge_capacity_is_not_allocated_up_front() {
        let mut list = FixedList::<u8>::new(1 << 60);

        list.add(7);

        assert_eq!(list.capacity(), 1 << 60);
        assert_eq!(list.get(0), Ok(&7));
        assert!(!list.is_full());
    }

    #[test]
    fn try_add_reports_dropped_elements() {
        let mut list = FixedList::new(1);

        assert!(list.try_add('x'));
        assert!(!list.try_add('y'));
        assert_eq!(list.get(0), Ok(&'x'));
    }

    #[test]
    fn zero_capacity_list_stays_empty() {
        let mut list = FixedList::new(0);

        list.add(1);

        assert!(list.is_empty());
        assert!(!list.iter().has_next());
        assert!(!list.reversed_iter().has_next());
    }

    #[test]
    fn get_past_the_end_fails() {
        let mut list = FixedList::new(8);
        list.add(1);

        assert_eq!(list.get(1), Err(Error::OutOfBounds { index: 1, len: 1 }));
        assert_eq!(list.get(7), Err(Error::OutOfBounds { index: 7, len: 1 }));
    }

    #[test]
    fn cursors_walk_the_list_in_both_directions() {
        let list = (1..=3).collect::<FixedList<_>>();

        let mut ascending = list.iter();
        assert_eq!(ascending.next_item(), Ok(&1));
        assert_eq!(ascending.next_item(), Ok(&2));
        assert_eq!(ascending.next_item(), Ok(&3));
        assert!(!ascending.has_next());

        let mut descending = list.reversed_iter();
        assert_eq!(descending.next_item(), Ok(&3));
        assert_eq!(descending.next_item(), Ok(&2));
        assert_eq!(descending.next_item(), Ok(&1));
        assert!(!descending.has_next());
    }

    #[test]
    fn exhausted_cursor_fails_loudly() {
        let list = (0..1).collect::<FixedList<_>>();

        let mut ascending = list.iter();
        ascending.next_item().unwrap();
        assert_eq!(ascending.next_item(), Err(Error::Exhausted));
        assert_eq!(ascending.next(), None);

        let mut descending = list.reversed_iter();
        descending.next_item().unwrap();
        assert_eq!(descending.next_item(), Err(Error::Exhausted));
        assert_eq!(descending.next(), None);
    }

    #[test]
    fn cursors_report_remaining_length() {
        let list = (0..5).collect::<FixedList<_>>();

        let mut ascending = list.iter();
        ascending.next();
        assert_eq!(ascending.len(), 4);

        let mut descending = list.reversed_iter();
        descending.next();
        descending.next();
        assert_eq!(descending.len(), 3);
    }

    #[test]
    fn collected_list_is_full() {
        let mut list = "abc".chars().collect::<FixedList<_>>();

        assert_eq!(list.capacity(), 3);
        assert!(list.is_full());

        list.extend("de".chars());
        assert_eq!(list.len(), 3);
    }
}

//! A list kept ordered by a caller-supplied comparator.

use super::LinkedList;
use std::cmp::Ordering;
use std::fmt;

/// Singly linked list whose traversal order is always non-decreasing under `F`.
///
/// ```rust
/// use aoc_helpers::list::SortedList;
///
/// let mut by_len = SortedList::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// by_len.insert("ccc");
/// by_len.insert("a");
/// by_len.insert("bb");
/// assert_eq!(by_len.to_vec(), vec!["a", "bb", "ccc"]);
/// ```
pub struct SortedList<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: LinkedList<T>,
    cmp: F,
}

impl<T: Ord> SortedList<T> {
    /// Sorted by `T`'s own ordering
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }
}

impl<T, F> SortedList<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(cmp: F) -> Self {
        Self {
            items: LinkedList::new(),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `value` after every strictly smaller element (O(n))
    pub fn insert(&mut self, value: T) {
        let pos = self
            .items
            .iter()
            .take_while(|existing| (self.cmp)(existing, &value) == Ordering::Less)
            .count();
        self.items.insert(pos, value);
    }

    /// Whether an element equal to `value` is present.
    ///
    /// Stops scanning once past the position `value` would occupy.
    pub fn contains<E>(&self, value: &T, eq: E) -> bool
    where
        E: Fn(&T, &T) -> bool,
    {
        for existing in self.items.iter() {
            if eq(existing, value) {
                return true;
            }
            if (self.cmp)(value, existing) == Ordering::Less {
                return false;
            }
        }
        false
    }

    /// Remove the first element equal to `value` under `eq`
    pub fn remove<E>(&mut self, value: &T, eq: E) -> bool
    where
        E: Fn(&T, &T) -> bool,
    {
        self.items.remove(value, eq)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Smallest element, if any
    pub fn first(&self) -> Option<&T> {
        self.items.get(0)
    }

    /// Remove and return the smallest element
    pub fn pop_first(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Iterate in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T, F> Extend<T> for SortedList<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SortedList<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

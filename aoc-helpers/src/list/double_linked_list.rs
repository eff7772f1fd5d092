//! Doubly linked list backed by an index arena.
//!
//! Nodes live in a `Vec` and refer to each other by index, so there is no
//! shared ownership between neighbors. Removing a node swaps the last arena
//! slot into the hole and patches the moved node's neighbors.

use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked list with O(1) operations at both ends
#[derive(Debug, Clone)]
pub struct DoubleLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> DoubleLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add `value` at the back (O(1))
    pub fn push_back(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Slot {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Add `value` at the front (O(1))
    pub fn push_front(&mut self, value: T) {
        let idx = self.slots.len();
        self.slots.push(Slot {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.slots[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|idx| self.unlink(idx))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|idx| self.unlink(idx))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.slots[idx].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.slots[idx].value)
    }

    /// Arena index of the node at list position `index`.
    ///
    /// Walks from whichever end is closer.
    fn slot_at(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if index >= len {
            return None;
        }

        if index > len / 2 {
            let mut cursor = self.tail?;
            for _ in 0..(len - 1 - index) {
                cursor = self.slots[cursor].prev?;
            }
            Some(cursor)
        } else {
            let mut cursor = self.head?;
            for _ in 0..index {
                cursor = self.slots[cursor].next?;
            }
            Some(cursor)
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index).map(|idx| &self.slots[idx].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slot_at(index).map(|idx| &mut self.slots[idx].value)
    }

    /// Overwrite the value at `index`; `false` when out of range
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Insert so that `value` ends up at `index`; valid for `0..=len`
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index == 0 {
            self.push_front(value);
            return true;
        }
        if index == self.len() {
            self.push_back(value);
            return true;
        }
        let Some(target) = self.slot_at(index) else {
            return false;
        };

        // New node goes between `target.prev` and `target`; index > 0 so prev exists.
        let prev = self.slots[target].prev;
        let idx = self.slots.len();
        self.slots.push(Slot {
            value,
            prev,
            next: Some(target),
        });
        self.slots[target].prev = Some(idx);
        match prev {
            Some(p) => self.slots[p].next = Some(idx),
            None => self.head = Some(idx),
        }
        true
    }

    /// Remove the first element equal to `value` under `eq`
    pub fn remove<F>(&mut self, value: &T, eq: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if eq(&self.slots[idx].value, value) {
                self.unlink(idx);
                return true;
            }
            cursor = self.slots[idx].next;
        }
        false
    }

    /// Detach the node in arena slot `idx` and return its value
    fn unlink(&mut self, idx: usize) -> T {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        let removed = self.slots.swap_remove(idx);

        // The former last slot now lives at `idx`; repoint its neighbors.
        if idx < self.slots.len() {
            let (moved_prev, moved_next) = (self.slots[idx].prev, self.slots[idx].next);
            match moved_prev {
                Some(p) => self.slots[p].next = Some(idx),
                None => self.head = Some(idx),
            }
            match moved_next {
                Some(n) => self.slots[n].prev = Some(idx),
                None => self.tail = Some(idx),
            }
        }

        removed.value
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    /// Double-ended iterator, head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Values from tail to head
    pub fn to_vec_rev(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoubleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoubleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator over a [`DoubleLinkedList`]
pub struct Iter<'a, T> {
    list: &'a DoubleLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let slot = &self.list.slots[idx];
        self.front = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let slot = &self.list.slots[idx];
        self.back = slot.prev;
        self.remaining -= 1;
        Some(&slot.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoubleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

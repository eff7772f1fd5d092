//! FIFO queue.

use super::DoubleLinkedList;

/// First-in first-out queue: push at the tail, pop at the head
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    inner: DoubleLinkedList<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            inner: DoubleLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// The element [`pop`](Self::pop) would return next
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Iterate in dequeue order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.inner.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.to_vec()
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Fifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Fifo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

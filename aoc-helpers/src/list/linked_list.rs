//! Singly linked list with boxed nodes.

use super::{Node, drop_chain};

/// A singly linked list. Appending walks to the tail, so prefer
/// [`push_front`](Self::push_front) or [`DoubleLinkedList`](super::DoubleLinkedList)
/// when order of insertion at the back matters for speed.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `value` at the end (O(n))
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value, None)));
        self.len += 1;
    }

    /// Add `value` at the front (O(1))
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(value, next)));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor?.next.as_deref();
        }
        cursor
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.node_at_mut(index).map(|n| &mut n.value)
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
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.push_front(value);
            return true;
        }
        let Some(prev) = self.node_at_mut(index - 1) else {
            return false;
        };
        let next = prev.next.take();
        prev.next = Some(Box::new(Node::new(value, next)));
        self.len += 1;
        true
    }

    /// Remove the first element equal to `value` under `eq`
    pub fn remove<F>(&mut self, value: &T, eq: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        match self.iter().position(|v| eq(v, value)) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.node_at_mut(index - 1)?;
        let removed = prev.next.take()?;
        let Node { value, next } = *removed;
        prev.next = next;
        self.len -= 1;
        Some(value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

/// Borrowing iterator, head to tail
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

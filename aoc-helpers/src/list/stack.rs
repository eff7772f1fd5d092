//! LIFO stack on boxed nodes.

use super::{Node, drop_chain};

/// Last-in first-out stack; every operation is O(1)
#[derive(Debug)]
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node::new(value, next)));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let Node { value, next } = *node;
            self.top = next;
            self.len -= 1;
            value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_deref_mut().map(|node| &mut node.value)
    }

    /// Iterate from the top of the stack down
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.top.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.value)
    }

    /// Values from top to bottom
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.top);
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

//! Linked containers: singly and doubly linked lists, a FIFO queue, a stack
//! and a comparator-ordered list.
//!
//! Every container owns its nodes exclusively and tracks its length, so
//! `len()` is O(1). `remove` always takes an equality function and removes
//! only the first match.

mod double_linked_list;
mod fifo;
mod linked_list;
mod sorted_list;
mod stack;

pub use double_linked_list::DoubleLinkedList;
pub use fifo::Fifo;
pub use linked_list::LinkedList;
pub use sorted_list::SortedList;
pub use stack::Stack;

/// Boxed singly linked node shared by the forward-only containers
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Self { value, next }
    }
}

/// Tear down a chain of boxed nodes one at a time.
///
/// The default drop glue recurses once per node and overflows the stack on
/// long lists.
pub(crate) fn drop_chain<T>(head: &mut Option<Box<Node<T>>>) {
    let mut cursor = head.take();
    while let Some(mut node) = cursor {
        cursor = node.next.take();
    }
}

#[cfg(test)]
mod tests;

//! Tests for the list containers.

use super::*;
use proptest::prelude::*;

fn same(a: &i32, b: &i32) -> bool {
    a == b
}

#[test]
fn test_linked_list_push_and_get() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.get(2), Some(&3));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_linked_list_insert_bounds() {
    let mut list: LinkedList<i32> = [1, 3].into_iter().collect();

    assert!(list.insert(1, 2));
    assert!(list.insert(3, 4));
    assert!(list.insert(0, 0));
    assert!(!list.insert(6, 9));
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(list.len(), 5);
}

#[test]
fn test_linked_list_set_and_remove() {
    let mut list: LinkedList<i32> = [5, 6, 5].into_iter().collect();

    assert!(list.set(1, 7));
    assert!(!list.set(3, 7));
    assert!(list.remove(&5, same));
    assert_eq!(list.to_vec(), vec![7, 5]);
    assert!(!list.remove(&9, same));
    assert_eq!(list.remove_at(1), Some(5));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_long_lists_drop_without_overflow() {
    let list: LinkedList<u32> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);

    let stack: Stack<u32> = (0..200_000).collect();
    drop(stack);
}

#[test]
fn test_double_linked_list_both_ends() {
    let mut list = DoubleLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.to_vec_rev(), vec![3, 2, 1]);
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_double_linked_list_index_from_either_half() {
    let mut list: DoubleLinkedList<i32> = (0..10).collect();

    assert_eq!(list.get(1), Some(&1));
    assert_eq!(list.get(8), Some(&8));
    assert!(list.set(7, 70));
    assert!(list.insert(9, 85));
    assert!(list.insert(2, 15));
    assert!(!list.insert(20, 0));

    assert_eq!(
        list.to_vec(),
        vec![0, 1, 15, 2, 3, 4, 5, 6, 70, 8, 85, 9]
    );
    assert_eq!(list.len(), 12);
}

#[test]
fn test_double_linked_list_remove_keeps_links() {
    let mut list: DoubleLinkedList<i32> = (0..6).collect();

    // Removing from the middle moves the last arena slot into the hole.
    assert!(list.remove(&2, same));
    assert!(list.remove(&0, same));
    assert!(!list.remove(&2, same));
    list.push_back(6);

    assert_eq!(list.to_vec(), vec![1, 3, 4, 5, 6]);
    assert_eq!(list.to_vec_rev(), vec![6, 5, 4, 3, 1]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&6));
}

#[test]
fn test_double_linked_list_iter_meets_in_middle() {
    let list: DoubleLinkedList<i32> = (1..=4).collect();
    let mut it = list.iter();

    assert_eq!(it.len(), 4);
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&4));
    assert_eq!(it.next(), Some(&2));
    assert_eq!(it.next_back(), Some(&3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn test_fifo_order() {
    let mut queue = Fifo::new();
    queue.push('a');
    queue.push('b');

    assert_eq!(queue.peek(), Some(&'a'));
    assert_eq!(queue.pop(), Some('a'));
    queue.push('c');
    assert_eq!(queue.to_vec(), vec!['b', 'c']);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop(), Some('b'));
    assert_eq!(queue.pop(), Some('c'));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_stack_order() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), None);

    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Some(&2));
    *stack.peek_mut().unwrap() = 20;
    assert_eq!(stack.to_vec(), vec![20, 1]);
    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}

#[test]
fn test_sorted_list_equal_values_keep_insertion_order() {
    let mut list = SortedList::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    list.insert((2, 'a'));
    list.insert((1, 'b'));
    list.insert((2, 'c'));

    // New equal keys go before existing ones: only strictly smaller values precede.
    assert_eq!(list.to_vec(), vec![(1, 'b'), (2, 'c'), (2, 'a')]);
}

#[test]
fn test_sorted_list_contains_and_remove() {
    let mut list = SortedList::natural();
    list.extend([5, 1, 3]);

    assert!(list.contains(&3, same));
    assert!(!list.contains(&2, same));
    assert!(!list.contains(&9, same));
    assert!(list.remove(&3, same));
    assert!(!list.remove(&3, same));
    assert_eq!(list.get(1), Some(&5));
    assert_eq!(list.pop_first(), Some(1));
    assert_eq!(list.first(), Some(&5));
    assert_eq!(list.len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Traversal equals the sorted order of everything inserted
    #[test]
    fn prop_sorted_list_is_sorted(values in prop::collection::vec(-100i32..100, 0..40)) {
        let mut list = SortedList::natural();
        list.extend(values.iter().copied());

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(list.to_vec(), expected);
        prop_assert_eq!(list.len(), values.len());
    }

    /// Arena removal agrees with removing from a Vec
    #[test]
    fn prop_double_linked_list_matches_vec(
        values in prop::collection::vec(0u8..10, 0..30),
        removals in prop::collection::vec(0u8..10, 0..10),
    ) {
        let mut list: DoubleLinkedList<u8> = values.iter().copied().collect();
        let mut model = values.clone();

        for r in removals {
            let expected = model.iter().position(|v| *v == r).map(|i| model.remove(i)).is_some();
            prop_assert_eq!(list.remove(&r, |a, b| a == b), expected);
        }

        let mut reversed = model.clone();
        reversed.reverse();
        prop_assert_eq!(list.to_vec(), model);
        prop_assert_eq!(list.to_vec_rev(), reversed);
    }
}

//! Slice helpers.

/// Copy of `items` without the element at `index`. An out-of-range index
/// copies everything.
pub fn remove_element<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, v)| v.clone())
        .collect()
}

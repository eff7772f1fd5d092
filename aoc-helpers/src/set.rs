//! Hash-backed set with the set algebra puzzle code keeps reaching for.

use std::collections::HashSet;
use std::collections::hash_set;
use std::hash::Hash;

/// An unordered collection of distinct values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }

    /// Insert `value`; `true` if it was not already present
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Remove `value`; `true` if it was present
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Every element whose membership is true in `self` or `other`
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(self.len().max(other.len()));
        out.extend(self.iter().cloned());
        out.extend(other.iter().cloned());
        out
    }

    /// Elements present in both sets. Iterates whichever set is smaller.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter(|v| large.contains(v))
            .cloned()
            .collect()
    }

    /// Elements of `self` not in `other`
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|v| !other.contains(v))
            .cloned()
            .collect()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }

    /// Elements in arbitrary order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_remove_report_changes() {
        let mut set = Set::new();
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&"a"));

        assert!(set.remove(&"a"));
        assert!(!set.remove(&"a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_operations_leave_operands_untouched() {
        let a: Set<i32> = [1, 2, 3].into_iter().collect();
        let b: Set<i32> = [3, 4].into_iter().collect();

        let mut union = a.union(&b).to_vec();
        union.sort();
        assert_eq!(union, vec![1, 2, 3, 4]);
        assert_eq!(a.intersection(&b).to_vec(), vec![3]);
        assert_eq!(b.intersection(&a).to_vec(), vec![3]);

        let mut diff = a.difference(&b).to_vec();
        diff.sort();
        assert_eq!(diff, vec![1, 2]);

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_is_subset() {
        let small: Set<i32> = [1, 2].into_iter().collect();
        let big: Set<i32> = [1, 2, 3].into_iter().collect();

        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(Set::new().is_subset(&small));
        assert!(small.is_subset(&small));
    }

    fn small_set() -> impl Strategy<Value = Set<u8>> {
        prop::collection::vec(0u8..20, 0..15).prop_map(Set::from_iter)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_union_size(a in small_set(), b in small_set()) {
            let union = a.union(&b);
            let common = a.intersection(&b);
            prop_assert_eq!(union.len(), a.len() + b.len() - common.len());
            prop_assert!(a.is_subset(&union));
            prop_assert!(b.is_subset(&union));
        }

        #[test]
        fn prop_intersection_is_subset_of_both(a in small_set(), b in small_set()) {
            let common = a.intersection(&b);
            prop_assert!(common.is_subset(&a));
            prop_assert!(common.is_subset(&b));
        }

        #[test]
        fn prop_difference_is_disjoint(a in small_set(), b in small_set()) {
            let diff = a.difference(&b);
            prop_assert!(diff.intersection(&b).is_empty());
            prop_assert!(diff.is_subset(&a));
        }
    }
}

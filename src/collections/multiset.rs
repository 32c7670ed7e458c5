//! Ordered multiset: equivalent elements are allowed and kept in insertion
//! order.

use super::write_delimited;
use crate::tree::{Compare, Identity, IntoIter, Iter, NaturalOrder, Position, Range, RbTree};
use std::fmt;
use std::ops::RangeBounds;

/// An ordered multiset.
///
/// Equivalent elements sit next to each other in iteration order, oldest
/// first.
///
/// # Examples
///
/// ```rust
/// use ordtree::collections::OrderedMultiSet;
///
/// let mut multiset = OrderedMultiSet::new();
/// multiset.insert_many([1, 3, 4, 2, 2]);
///
/// let (lower, upper) = multiset.equal_range(&2);
/// assert_eq!(multiset.get(lower), Some(&2));
/// assert_eq!(multiset.get(upper), Some(&3));
/// assert_eq!(multiset.remove_all(&2), 2);
/// assert_eq!(multiset.len(), 3);
/// ```
pub struct OrderedMultiSet<T, C = NaturalOrder> {
    tree: RbTree<T, Identity, C>,
}

impl<T> OrderedMultiSet<T> {
    /// Creates an empty multiset.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedMultiSet<T, C> {
    /// Creates an empty multiset ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Returns the number of elements, counting duplicates.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Upper bound on the number of elements.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two multisets in O(1).
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Position of the smallest element.
    #[inline]
    pub fn begin(&self) -> Position {
        self.tree.begin()
    }

    /// The past-the-end position.
    #[inline]
    pub fn end(&self) -> Position {
        self.tree.end()
    }

    /// Position following `position`.
    #[inline]
    pub fn next(&self, position: Position) -> Position {
        self.tree.next(position)
    }

    /// Position preceding `position`.
    #[inline]
    pub fn prev(&self, position: Position) -> Position {
        self.tree.prev(position)
    }

    /// Returns the element at `position`.
    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.tree.get(position)
    }

    /// Removes the single element at `position` and returns it.
    pub fn erase(&mut self, position: Position) -> Option<T> {
        self.tree.erase(position)
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }
}

impl<T, C: Compare<T>> OrderedMultiSet<T, C> {
    /// Inserts `value` after every equivalent element and returns its position.
    pub fn insert(&mut self, value: T) -> Position {
        self.tree.insert_equal(value)
    }

    /// Inserts each value in turn, returning their positions.
    pub fn insert_many<I>(&mut self, values: I) -> Vec<Position>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.tree.insert_equal(value))
            .collect()
    }

    /// Removes every element equivalent to `key`; returns how many were
    /// removed.
    pub fn remove_all(&mut self, key: &T) -> usize {
        self.tree.erase_key(key)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge_equal(&mut other.tree);
    }

    /// Number of elements equivalent to `key`.
    #[inline]
    pub fn count(&self, key: &T) -> usize {
        self.tree.count(key)
    }

    /// Position of the first element equivalent to `key`, or the end.
    #[inline]
    pub fn find(&self, key: &T) -> Position {
        self.tree.find(key)
    }

    /// Returns `true` if at least one element equivalent to `key` is present.
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        self.tree.contains(key)
    }

    /// Position of the first element not less than `key`.
    #[inline]
    pub fn lower_bound(&self, key: &T) -> Position {
        self.tree.lower_bound(key)
    }

    /// Position of the first element greater than `key`.
    #[inline]
    pub fn upper_bound(&self, key: &T) -> Position {
        self.tree.upper_bound(key)
    }

    /// The run of elements equivalent to `key` as a half-open pair of
    /// positions.
    #[inline]
    pub fn equal_range(&self, key: &T) -> (Position, Position) {
        self.tree.equal_range(key)
    }

    /// Returns an iterator over the elements within `range`.
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> Range<'_, T> {
        self.tree.range(range)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone, C: Clone> Clone for OrderedMultiSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T, C: Default> Default for OrderedMultiSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialEq, C> PartialEq for OrderedMultiSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for OrderedMultiSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for OrderedMultiSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedMultiSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, "{", "}", self, |formatter, element| {
            write!(formatter, "{element}")
        })
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedMultiSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::default();
        multiset.extend(iter);
        multiset
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedMultiSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.tree.insert_equal(value);
        }
    }
}

impl<T, C> IntoIterator for OrderedMultiSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedMultiSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::OrderBy;
    use rstest::rstest;

    fn multiset_of(values: &[i32]) -> OrderedMultiSet<i32> {
        values.iter().copied().collect()
    }

    #[rstest]
    fn test_duplicates_are_kept() {
        let multiset = multiset_of(&[1, 3, 4, 2, 2]);
        assert_eq!(multiset.len(), 5);
        assert_eq!(
            multiset.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 2, 3, 4]
        );
    }

    #[rstest]
    #[case(2, 2)]
    #[case(1, 1)]
    #[case(9, 0)]
    fn test_count(#[case] key: i32, #[case] expected: usize) {
        assert_eq!(multiset_of(&[1, 3, 4, 2, 2]).count(&key), expected);
    }

    #[rstest]
    fn test_equal_range_of_absent_key_is_empty() {
        let multiset = multiset_of(&[1, 3]);
        let (lower, upper) = multiset.equal_range(&2);
        assert_eq!(lower, upper);
        assert_eq!(multiset.get(lower), Some(&3));
    }

    #[rstest]
    fn test_equivalent_elements_keep_insertion_order() {
        let by_tens = OrderBy::new(|value: &i32| value / 10);
        let mut multiset = OrderedMultiSet::with_comparator(by_tens);
        multiset.insert_many([15, 11, 3, 19, 12]);
        assert_eq!(
            multiset.iter().copied().collect::<Vec<_>>(),
            vec![3, 15, 11, 19, 12]
        );
        assert_eq!(multiset.count(&10), 4);
    }

    #[rstest]
    fn test_erase_single_duplicate() {
        let mut multiset = multiset_of(&[2, 2, 2]);
        let position = multiset.find(&2);
        assert_eq!(multiset.erase(position), Some(2));
        assert_eq!(multiset.count(&2), 2);
    }

    #[rstest]
    fn test_merge_moves_everything() {
        let mut target = multiset_of(&[1, 2]);
        let mut source = multiset_of(&[2, 2, 5]);
        target.merge(&mut source);
        assert_eq!(target, multiset_of(&[1, 2, 2, 2, 5]));
        assert!(source.is_empty());
    }

    #[rstest]
    fn test_display_and_debug() {
        let multiset = multiset_of(&[2, 1, 2]);
        assert_eq!(multiset.to_string(), "{1, 2, 2}");
        assert_eq!(format!("{multiset:?}"), "[1, 2, 2]");
    }
}

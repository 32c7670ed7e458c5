//! Ordered set with unique elements.

use super::write_delimited;
use crate::tree::{Compare, Identity, IntoIter, Iter, NaturalOrder, Position, Range, RbTree};
use std::fmt;
use std::ops::RangeBounds;

/// An ordered set: every element is unique under the comparator `C`.
///
/// # Time Complexity
///
/// | Operation                     | Complexity |
/// |-------------------------------|------------|
/// | `insert`                      | O(log N)   |
/// | `remove` / `erase`            | O(log N)   |
/// | `find` / `contains` / bounds  | O(log N)   |
/// | `first` / `last` / `len`      | O(1)       |
/// | `merge`                       | O(M log(N + M)) |
///
/// # Examples
///
/// ```rust
/// use ordtree::collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.insert_many([534_789, 2_479_056, 987_654, 1, 35_674]);
///
/// assert_eq!(set.first(), Some(&1));
/// assert_eq!(set.last(), Some(&2_479_056));
/// assert!(set.contains(&35_674));
/// ```
pub struct OrderedSet<T, C = NaturalOrder> {
    tree: RbTree<T, Identity, C>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set holds no elements.
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

    /// Exchanges the contents of two sets in O(1).
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Position of the smallest element, or [`end`](Self::end) when empty.
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

    /// Removes the element at `position` and returns it.
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

impl<T, C: Compare<T>> OrderedSet<T, C> {
    /// Inserts `value` if no equivalent element is present.
    ///
    /// Returns the position of the stored element and whether an insertion
    /// took place.
    pub fn insert(&mut self, value: T) -> (Position, bool) {
        self.tree.insert_unique(value)
    }

    /// Inserts each value in turn, returning one `(position, inserted)` pair
    /// per value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::collections::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// let outcomes = set.insert_many([2, 1, 2]);
    /// let inserted: Vec<bool> = outcomes.iter().map(|(_, inserted)| *inserted).collect();
    /// assert_eq!(inserted, vec![true, true, false]);
    /// ```
    pub fn insert_many<I>(&mut self, values: I) -> Vec<(Position, bool)>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .map(|value| self.tree.insert_unique(value))
            .collect()
    }

    /// Removes the element equivalent to `key`; returns `true` if one was
    /// present.
    pub fn remove(&mut self, key: &T) -> bool {
        self.tree.erase_key(key) > 0
    }

    /// Moves every element of `other` that is not yet present here.
    ///
    /// Elements already present stay in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge_unique(&mut other.tree);
    }

    /// Position of the element equivalent to `key`, or the end.
    #[inline]
    pub fn find(&self, key: &T) -> Position {
        self.tree.find(key)
    }

    /// Returns `true` if an element equivalent to `key` is present.
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

    /// Returns an iterator over the elements within `range`.
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> Range<'_, T> {
        self.tree.range(range)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone, C: Clone> Clone for OrderedSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T, C: Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialEq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, "{", "}", self, |formatter, element| {
            write!(formatter, "{element}")
        })
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.tree.insert_unique(value);
        }
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

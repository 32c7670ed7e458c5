//! Ordered map from unique keys to values.

use super::write_delimited;
use crate::error::OutOfRangeError;
use crate::tree::{self, Compare, FirstOfPair, NaturalOrder, Position, RbTree};
use std::fmt;
use std::iter::FusedIterator;

/// An ordered map: each key appears at most once.
///
/// Entries are stored as `(K, V)` pairs ordered by key.
///
/// # Time Complexity
///
/// | Operation                         | Complexity |
/// |-----------------------------------|------------|
/// | `insert` / `insert_or_assign`     | O(log N)   |
/// | `get` / `at` / `contains_key`     | O(log N)   |
/// | `get_or_insert_default`           | O(log N)   |
/// | `remove`                          | O(log N)   |
/// | `len` / `is_empty`                | O(1)       |
///
/// # Examples
///
/// ```rust
/// use ordtree::collections::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(3, "three");
/// map.insert(1, "one");
///
/// let (_, inserted) = map.insert(3, "drei");
/// assert!(!inserted);
/// assert_eq!(map.get(&3), Some(&"three"));
///
/// map.insert_or_assign(3, "drei");
/// assert_eq!(map.get(&3), Some(&"drei"));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub struct OrderedMap<K, V, C = NaturalOrder> {
    tree: RbTree<(K, V), FirstOfPair, C>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map whose keys are ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Upper bound on the number of entries.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two maps in O(1).
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Position of the entry with the smallest key.
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

    /// Returns the entry at `position`.
    pub fn entry_at(&self, position: Position) -> Option<(&K, &V)> {
        self.tree.get(position).map(|(key, value)| (key, value))
    }

    /// Returns the value at `position` mutably.
    pub fn value_at_mut(&mut self, position: Position) -> Option<&mut V> {
        self.tree.get_mut(position).map(|(_, value)| value)
    }

    /// Removes the entry at `position` and returns it.
    pub fn erase(&mut self, position: Position) -> Option<(K, V)> {
        self.tree.erase(position)
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|(key, value)| (key, value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|(key, value)| (key, value))
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over the entries with mutable values, in key order.
    pub fn iter_mut(&mut self) -> MapIterMut<'_, K, V> {
        MapIterMut {
            inner: self.tree.iter_mut(),
        }
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over mutable values in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::collections::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// for value in map.values_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 20]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.tree.iter_mut(),
        }
    }
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
    /// Inserts `(key, value)` unless `key` is already present.
    ///
    /// Returns the position of the entry for `key` and whether an insertion
    /// took place. An existing value is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        self.tree.insert_unique((key, value))
    }

    /// Inserts `(key, value)`, overwriting the value if `key` is present.
    ///
    /// Returns the position of the entry and `true` if it was newly inserted.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Position, bool) {
        let position = self.tree.find(&key);
        if let Some((_, slot)) = self.tree.get_mut(position) {
            *slot = value;
            return (position, false);
        }
        self.tree.insert_unique((key, value))
    }

    /// Inserts each pair in turn with [`insert`](Self::insert) semantics.
    pub fn insert_many<I>(&mut self, entries: I) -> Vec<(Position, bool)>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries
            .into_iter()
            .map(|entry| self.tree.insert_unique(entry))
            .collect()
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(self.tree.find(key)).map(|(_, value)| value)
    }

    /// Returns the value for `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.tree.find(key);
        self.tree.get_mut(position).map(|(_, value)| value)
    }

    /// Bounds-checked lookup.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `key` is absent.
    pub fn at(&self, key: &K) -> Result<&V, OutOfRangeError> {
        self.get(key).ok_or(OutOfRangeError {
            accessor: "OrderedMap::at",
        })
    }

    /// Bounds-checked mutable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `key` is absent.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, OutOfRangeError> {
        self.get_mut(key).ok_or(OutOfRangeError {
            accessor: "OrderedMap::at_mut",
        })
    }

    /// Returns the value for `key`, inserting `V::default()` first if the
    /// key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::collections::OrderedMap;
    ///
    /// let mut tally: OrderedMap<char, usize> = OrderedMap::new();
    /// for letter in "abracadabra".chars() {
    ///     *tally.get_or_insert_default(letter) += 1;
    /// }
    /// assert_eq!(tally.get(&'a'), Some(&5));
    /// assert_eq!(tally.len(), 5);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let mut position = self.tree.find(&key);
        if position.is_end() {
            position = self.tree.insert_unique((key, V::default())).0;
        }
        match self.tree.get_mut(position) {
            Some((_, value)) => value,
            None => unreachable!("entry was found or inserted just above"),
        }
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.tree.find(key);
        self.tree.erase(position).map(|(_, value)| value)
    }

    /// Moves every entry of `other` whose key is not yet present here.
    ///
    /// Entries with keys already present stay in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge_unique(&mut other.tree);
    }

    /// Position of the entry for `key`, or the end.
    #[inline]
    pub fn find(&self, key: &K) -> Position {
        self.tree.find(key)
    }

    /// Position of the first entry whose key is not less than `key`.
    #[inline]
    pub fn lower_bound(&self, key: &K) -> Position {
        self.tree.lower_bound(key)
    }

    /// Position of the first entry whose key is greater than `key`.
    #[inline]
    pub fn upper_bound(&self, key: &K) -> Position {
        self.tree.upper_bound(key)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over `(&K, &V)` in key order.
pub struct MapIter<'a, K, V> {
    inner: tree::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for MapIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for MapIter<'_, K, V> {}

impl<K, V> FusedIterator for MapIter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in key order.
pub struct MapIterMut<'a, K, V> {
    inner: tree::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for MapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for MapIterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (&*key, value))
    }
}

impl<K, V> ExactSizeIterator for MapIterMut<'_, K, V> {}

impl<K, V> FusedIterator for MapIterMut<'_, K, V> {}

/// Owning iterator over `(K, V)` in key order.
pub struct MapIntoIter<K, V> {
    inner: tree::IntoIter<(K, V)>,
}

impl<K, V> Iterator for MapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for MapIntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for MapIntoIter<K, V> {}

impl<K, V> FusedIterator for MapIntoIter<K, V> {}

/// Iterator over the keys of an [`OrderedMap`].
pub struct Keys<'a, K, V> {
    inner: tree::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`].
pub struct Values<'a, K, V> {
    inner: tree::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Iterator over mutable values of an [`OrderedMap`].
pub struct ValuesMut<'a, K, V> {
    inner: tree::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, "{", "}", self, |formatter, (key, value)| {
            write!(formatter, "{key}: {value}")
        })
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for OrderedMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for entry in iter {
            self.tree.insert_unique(entry);
        }
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = MapIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        MapIntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut OrderedMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = MapIterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Tests
// =============================================================================

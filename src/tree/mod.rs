//! The red-black tree engine shared by every ordered container.
//!
//! This module provides [`RbTree`], a mutable, in-memory, self-balancing
//! binary search tree parameterized by a [`KeyProjection`] and a
//! [`Compare`] strategy.
//!
//! # Overview
//!
//! - O(log N) `find`, `lower_bound`, `upper_bound`, `equal_range`
//! - O(log N) `insert_unique`, `insert_equal`, `erase`
//! - O(1) `first`/`last`, `begin`/`end`, `len`, `is_empty`, `swap`
//! - O(N) `clear`, `clone` and full traversal
//!
//! # Internal Structure
//!
//! Nodes live in an arena and link to each other by index; children are
//! owned downward and the parent link is a back-reference only. A permanent
//! sentinel node acts as the end position and caches the leftmost and
//! rightmost data nodes, so `begin`, `end`, `first` and `last` never branch
//! on emptiness.
//!
//! The tree maintains the following invariants after every public operation:
//! 1. No red node has a red parent
//! 2. Every path from a node to a missing child crosses the same number of
//!    black nodes
//! 3. The root, when present, is black
//! 4. In-order traversal is non-decreasing under the comparator
//! 5. The sentinel's leftmost/rightmost caches are the true extremes
//!
//! [`RbTree::check_invariants`] verifies all of them.
//!
//! # Examples
//!
//! ```rust
//! use ordtree::tree::RbTree;
//!
//! let mut tree: RbTree<i32> = RbTree::new();
//! for value in [1, 3, 4, 2, 2] {
//!     tree.insert_equal(value);
//! }
//!
//! let (lower, upper) = tree.equal_range(&2);
//! assert_eq!(tree.get(lower), Some(&2));
//! assert_eq!(tree.get(upper), Some(&3));
//! assert_eq!(tree.count(&2), 2);
//! ```

mod iter;
mod node;
mod position;
mod projection;
mod rebalance;
mod traversal;
mod validate;

pub use iter::{IntoIter, Iter, IterMut, Range};
pub use position::Position;
pub use projection::{
    Compare, FirstOfPair, Identity, KeyProjection, NaturalOrder, OrderBy, ReverseOrder,
};

use node::{Arena, Color, Node, NodeId, Side};
use smallvec::SmallVec;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Bound, RangeBounds};

/// Inline capacity of the explicit stack used by the iterative clone.
const CLONE_STACK_INLINE: usize = 32;

// =============================================================================
// RbTree Definition
// =============================================================================

/// A red-black tree storing payloads of type `T`.
///
/// `P` extracts the comparison key from a payload ([`Identity`] or
/// [`FirstOfPair`]) and `C` orders keys ([`NaturalOrder`] by default).
///
/// Two insertion policies are offered: [`insert_unique`](Self::insert_unique)
/// rejects a payload whose key is equivalent to a stored one, and
/// [`insert_equal`](Self::insert_equal) always inserts, placing the new
/// payload after every equivalent one already stored.
///
/// # Time Complexity
///
/// | Operation                      | Complexity   |
/// |--------------------------------|--------------|
/// | `new`                          | O(1)         |
/// | `find` / bounds / `contains`   | O(log N)     |
/// | `insert_unique`/`insert_equal` | O(log N)     |
/// | `erase`                        | O(log N)     |
/// | `erase_key`                    | O(log N + k) |
/// | `count`                        | O(log N + k) |
/// | `first`/`last`                 | O(1)         |
/// | `len`/`is_empty`/`swap`        | O(1)         |
/// | `clear`/`clone`                | O(N)         |
///
/// # Examples
///
/// ```rust
/// use ordtree::tree::RbTree;
///
/// let mut tree: RbTree<i32> = RbTree::new();
/// let (position, inserted) = tree.insert_unique(5);
/// assert!(inserted);
///
/// let (again, inserted) = tree.insert_unique(5);
/// assert!(!inserted);
/// assert_eq!(again, position);
/// assert_eq!(tree.len(), 1);
/// ```
pub struct RbTree<T, P = Identity, C = NaturalOrder> {
    arena: Arena<T>,
    length: usize,
    comparator: C,
    projection: PhantomData<fn() -> P>,
}

impl<T, P, C: Default> RbTree<T, P, C> {
    /// Creates an empty tree with the default comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let tree: RbTree<String> = RbTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.begin(), tree.end());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, P, C> RbTree<T, P, C> {
    /// Creates an empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::{Identity, RbTree};
    ///
    /// let descending = |left: &i32, right: &i32| right < left;
    /// let mut tree: RbTree<i32, Identity, _> = RbTree::with_comparator(descending);
    /// tree.insert_unique(1);
    /// tree.insert_unique(3);
    /// assert_eq!(tree.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            length: 0,
            comparator,
            projection: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Upper bound on the number of elements, derived from the node size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let small: RbTree<u8> = RbTree::new();
    /// let large: RbTree<[u64; 8]> = RbTree::new();
    /// assert!(small.max_size() > large.max_size());
    /// ```
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        usize::MAX / 2 / mem::size_of::<Node<T>>()
    }

    /// Returns the comparator ordering this tree.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    // =========================================================================
    // Positions
    // =========================================================================

    fn position_of(&self, id: NodeId) -> Position {
        Position::new(id, self.arena.node(id).generation)
    }

    /// Maps a position to its data node, or `None` for end and stale positions.
    fn resolve(&self, position: Position) -> Option<NodeId> {
        if position.is_end() {
            return None;
        }
        let node = self.arena.slot(position.node.index())?;
        (node.generation == position.generation && node.value.is_some()).then_some(position.node)
    }

    /// Position of the smallest element, or [`end`](Self::end) when empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_of(self.arena.leftmost())
    }

    /// The past-the-end position.
    #[inline]
    pub fn end(&self) -> Position {
        self.position_of(NodeId::SENTINEL)
    }

    /// Position following `position` in ascending order.
    ///
    /// Stepping past the largest element yields [`end`](Self::end); stepping
    /// forward from the end wraps to [`begin`](Self::begin). A stale position
    /// steps to the end.
    pub fn next(&self, position: Position) -> Position {
        let current = if position.is_end() {
            NodeId::SENTINEL
        } else {
            match self.resolve(position) {
                Some(id) => id,
                None => return self.end(),
            }
        };
        self.position_of(self.arena.successor(current))
    }

    /// Position preceding `position` in ascending order.
    ///
    /// Stepping back from the end yields the largest element; stepping back
    /// from the smallest element yields the end.
    pub fn prev(&self, position: Position) -> Position {
        let current = if position.is_end() {
            NodeId::SENTINEL
        } else {
            match self.resolve(position) {
                Some(id) => id,
                None => return self.end(),
            }
        };
        self.position_of(self.arena.predecessor(current))
    }

    /// Returns the element at `position`, or `None` for end and stale positions.
    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.resolve(position).and_then(|id| self.arena.value(id))
    }

    /// Returns the element at `position` mutably.
    ///
    /// Changing the element's comparison key is a logic error: the tree is
    /// not reordered.
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let id = self.resolve(position)?;
        self.arena.node_mut(id).value.as_mut()
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.arena.value(self.arena.leftmost())
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.arena.value(self.arena.rightmost())
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = RbTree::new();
    /// for value in [3, 1, 2] {
    ///     tree.insert_unique(value);
    /// }
    /// let ascending: Vec<&i32> = tree.iter().collect();
    /// let descending: Vec<&i32> = tree.iter().rev().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    /// assert_eq!(descending, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.length)
    }

    /// Returns an iterator over mutable references in ascending order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.arena)
    }

    // =========================================================================
    // Whole-tree Operations
    // =========================================================================

    /// Removes every element.
    ///
    /// Like [`Vec::clear`], this keeps the allocated node storage; later
    /// insertions reuse it before the tree grows again.
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.length, "clearing tree");
        self.arena.clear();
        self.length = 0;
    }

    /// Exchanges the contents, sizes and comparators of two trees in O(1).
    ///
    /// Positions follow their elements into the other tree.
    pub const fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty with the same comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut source: RbTree<i32> = RbTree::new();
    /// source.insert_unique(1);
    /// let moved = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(moved.len(), 1);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        tracing::trace!(moved = self.length, "moving tree contents");
        let empty = Self::with_comparator(self.comparator.clone());
        mem::replace(self, empty)
    }

    // =========================================================================
    // Erasure by Position
    // =========================================================================

    /// Removes the element at `position` and returns it.
    ///
    /// Returns `None` and leaves the tree untouched for end and stale
    /// positions. Every other outstanding position remains valid.
    ///
    /// The freed slot is kept for reuse by later insertions, so erasing never
    /// shrinks the tree's storage.
    pub fn erase(&mut self, position: Position) -> Option<T> {
        let id = self.resolve(position)?;
        self.remove_node(id)
    }

    fn remove_node(&mut self, id: NodeId) -> Option<T> {
        self.arena.detach(id);
        self.length -= 1;
        self.arena.release(id)
    }
}

impl<T, P, C> RbTree<T, P, C>
where
    P: KeyProjection<T>,
    C: Compare<P::Key>,
{
    fn key_of(&self, id: NodeId) -> Option<&P::Key> {
        self.arena.value(id).map(P::key)
    }

    /// `key < key(id)`; the sentinel compares as false.
    fn key_less_than_node(&self, key: &P::Key, id: NodeId) -> bool {
        self.key_of(id)
            .is_some_and(|node_key| self.comparator.less(key, node_key))
    }

    /// `key(id) < key`; the sentinel compares as false.
    fn node_less_than_key(&self, id: NodeId, key: &P::Key) -> bool {
        self.key_of(id)
            .is_some_and(|node_key| self.comparator.less(node_key, key))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    fn lower_bound_node(&self, key: &P::Key) -> NodeId {
        let mut candidate = NodeId::SENTINEL;
        let mut current = self.arena.root();
        while let Some(id) = current {
            if self.node_less_than_key(id, key) {
                current = self.arena.child(id, Side::Right);
            } else {
                candidate = id;
                current = self.arena.child(id, Side::Left);
            }
        }
        candidate
    }

    fn upper_bound_node(&self, key: &P::Key) -> NodeId {
        let mut candidate = NodeId::SENTINEL;
        let mut current = self.arena.root();
        while let Some(id) = current {
            if self.key_less_than_node(key, id) {
                candidate = id;
                current = self.arena.child(id, Side::Left);
            } else {
                current = self.arena.child(id, Side::Right);
            }
        }
        candidate
    }

    fn find_node(&self, key: &P::Key) -> NodeId {
        let found = self.lower_bound_node(key);
        if found == NodeId::SENTINEL || self.key_less_than_node(key, found) {
            NodeId::SENTINEL
        } else {
            found
        }
    }

    /// Position of the first element equivalent to `key`, or the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = RbTree::new();
    /// tree.insert_unique(7);
    /// assert_eq!(tree.get(tree.find(&7)), Some(&7));
    /// assert_eq!(tree.find(&8), tree.end());
    /// ```
    pub fn find(&self, key: &P::Key) -> Position {
        self.position_of(self.find_node(key))
    }

    /// Position of the first element whose key is not less than `key`.
    pub fn lower_bound(&self, key: &P::Key) -> Position {
        self.position_of(self.lower_bound_node(key))
    }

    /// Position of the first element whose key is greater than `key`.
    pub fn upper_bound(&self, key: &P::Key) -> Position {
        self.position_of(self.upper_bound_node(key))
    }

    /// The maximal run of elements equivalent to `key`, as
    /// `(lower_bound(key), upper_bound(key))`.
    pub fn equal_range(&self, key: &P::Key) -> (Position, Position) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Number of elements equivalent to `key`.
    pub fn count(&self, key: &P::Key) -> usize {
        let end = self.upper_bound_node(key);
        let mut current = self.lower_bound_node(key);
        let mut count = 0;
        while current != end {
            count += 1;
            current = self.arena.successor(current);
        }
        count
    }

    /// Returns `true` if an element equivalent to `key` is stored.
    #[inline]
    pub fn contains(&self, key: &P::Key) -> bool {
        self.find_node(key) != NodeId::SENTINEL
    }

    /// Returns an iterator over the elements whose keys fall in `range`.
    ///
    /// An inverted range (start after end) yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = RbTree::new();
    /// for value in 1..=5 {
    ///     tree.insert_unique(value);
    /// }
    /// let middle: Vec<&i32> = tree.range(2..=4).collect();
    /// assert_eq!(middle, vec![&2, &3, &4]);
    /// assert_eq!(tree.range(4..2).count(), 0);
    /// ```
    pub fn range<R>(&self, range: R) -> Range<'_, T>
    where
        R: RangeBounds<P::Key>,
    {
        let inverted = match (range.start_bound(), range.end_bound()) {
            (Bound::Included(start), Bound::Included(end)) => self.comparator.less(end, start),
            (
                Bound::Included(start) | Bound::Excluded(start),
                Bound::Included(end) | Bound::Excluded(end),
            ) => !self.comparator.less(start, end),
            _ => false,
        };
        if inverted {
            return Range::empty(&self.arena);
        }
        let front = match range.start_bound() {
            Bound::Included(start) => self.lower_bound_node(start),
            Bound::Excluded(start) => self.upper_bound_node(start),
            Bound::Unbounded => self.arena.leftmost(),
        };
        let back = match range.end_bound() {
            Bound::Included(end) => self.upper_bound_node(end),
            Bound::Excluded(end) => self.lower_bound_node(end),
            Bound::Unbounded => NodeId::SENTINEL,
        };
        Range::new(&self.arena, front, back)
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `value` unless an element with an equivalent key is stored.
    ///
    /// Returns the position of the new element and `true`, or the position
    /// of the existing equivalent element and `false`; in the latter case the
    /// tree is unchanged and `value` is dropped.
    ///
    /// Duplicate detection uses the descent itself plus one predecessor check
    /// rather than a separate lookup.
    pub fn insert_unique(&mut self, value: T) -> (Position, bool) {
        let (parent, side) = {
            let key = P::key(&value);
            let mut parent = NodeId::SENTINEL;
            let mut side = Side::Left;
            let mut current = self.arena.root();
            while let Some(id) = current {
                parent = id;
                side = if self.key_less_than_node(key, id) {
                    Side::Left
                } else {
                    Side::Right
                };
                current = self.arena.child(id, side);
            }

            // Everything before the insertion point is <= key, so the only
            // candidate for an equivalent key is the in-order predecessor.
            let candidate = match side {
                Side::Right => Some(parent),
                Side::Left if parent == self.arena.leftmost() => None,
                Side::Left => Some(self.arena.predecessor(parent)),
            };
            if let Some(candidate) = candidate
                && !self.node_less_than_key(candidate, key)
            {
                return (self.position_of(candidate), false);
            }
            (parent, side)
        };
        let id = self.link(parent, side, value);
        (self.position_of(id), true)
    }

    /// Inserts `value` unconditionally.
    ///
    /// Equivalent keys descend to the right, so the new element lands after
    /// every equivalent element already stored: runs of equal keys keep
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::{FirstOfPair, RbTree};
    ///
    /// let mut tree: RbTree<(i32, &str), FirstOfPair> = RbTree::new();
    /// tree.insert_equal((1, "first"));
    /// tree.insert_equal((1, "second"));
    /// let labels: Vec<&str> = tree.iter().map(|(_, label)| *label).collect();
    /// assert_eq!(labels, vec!["first", "second"]);
    /// ```
    pub fn insert_equal(&mut self, value: T) -> Position {
        let (parent, side) = {
            let key = P::key(&value);
            let mut parent = NodeId::SENTINEL;
            let mut side = Side::Left;
            let mut current = self.arena.root();
            while let Some(id) = current {
                parent = id;
                side = if self.key_less_than_node(key, id) {
                    Side::Left
                } else {
                    Side::Right
                };
                current = self.arena.child(id, side);
            }
            (parent, side)
        };
        let id = self.link(parent, side, value);
        self.position_of(id)
    }

    /// Hangs a new red node holding `value` under `parent` and rebalances.
    fn link(&mut self, parent: NodeId, side: Side, value: T) -> NodeId {
        let id = self.arena.allocate(parent, value, Color::Red);
        if parent == NodeId::SENTINEL {
            self.arena.set_root(Some(id));
            self.arena.set_leftmost(id);
            self.arena.set_rightmost(id);
        } else {
            self.arena.set_child(parent, side, Some(id));
            if side == Side::Left && parent == self.arena.leftmost() {
                self.arena.set_leftmost(id);
            }
            if side == Side::Right && parent == self.arena.rightmost() {
                self.arena.set_rightmost(id);
            }
        }
        self.arena.insert_fixup(id);
        self.length += 1;
        id
    }

    // =========================================================================
    // Erasure
    // =========================================================================

    /// Removes every element equivalent to `key` and returns how many were
    /// removed.
    ///
    /// When the run spans the whole tree this is a plain [`clear`](Self::clear).
    pub fn erase_key(&mut self, key: &P::Key) -> usize {
        let first = self.lower_bound_node(key);
        let last = self.upper_bound_node(key);
        if first == self.arena.leftmost() && last == NodeId::SENTINEL {
            let removed = self.length;
            self.clear();
            return removed;
        }
        let mut removed = 0;
        let mut current = first;
        while current != last {
            let next = self.arena.successor(current);
            self.remove_node(current);
            removed += 1;
            current = next;
        }
        tracing::trace!(removed, "erased equivalent run");
        removed
    }

    // =========================================================================
    // Merge
    // =========================================================================

    /// Moves every element of `other` whose key is not yet present here.
    ///
    /// Elements whose keys already exist in `self` stay in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut target: RbTree<i32> = RbTree::new();
    /// let mut source: RbTree<i32> = RbTree::new();
    /// for value in [1, 2] {
    ///     target.insert_unique(value);
    /// }
    /// for value in [2, 3] {
    ///     source.insert_unique(value);
    /// }
    ///
    /// target.merge_unique(&mut source);
    /// assert_eq!(target.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(source.iter().copied().collect::<Vec<_>>(), vec![2]);
    /// ```
    pub fn merge_unique(&mut self, other: &mut Self) {
        let mut moved = 0_usize;
        let mut current = other.arena.leftmost();
        while current != NodeId::SENTINEL {
            let next = other.arena.successor(current);
            let absent = other
                .key_of(current)
                .is_some_and(|key| !self.contains(key));
            if absent && let Some(value) = other.remove_node(current) {
                self.insert_unique(value);
                moved += 1;
            }
            current = next;
        }
        tracing::trace!(moved, left_behind = other.length, "merged unique");
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    ///
    /// Moved elements land after equivalent elements already in `self`.
    pub fn merge_equal(&mut self, other: &mut Self) {
        let values = other.arena.drain_in_order();
        other.length = 0;
        tracing::trace!(moved = values.len(), "merged equal");
        for value in values {
            self.insert_equal(value);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, P, C: Default> Default for RbTree<T, P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P, C: Clone> Clone for RbTree<T, P, C> {
    /// Structural copy: same shape and colors, fresh and compact node storage.
    ///
    /// Uses an explicit stack, so the copy does not recurse.
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.length);
        if let Some(root) = self.arena.root() {
            let mut stack: SmallVec<[(NodeId, NodeId, Option<Side>); CLONE_STACK_INLINE]> =
                SmallVec::new();
            stack.push((root, NodeId::SENTINEL, None));
            while let Some((source, parent, side)) = stack.pop() {
                let node = self.arena.node(source);
                let Some(value) = node.value.as_ref() else {
                    continue;
                };
                let copy = arena.allocate(parent, value.clone(), node.color);
                match side {
                    None => arena.set_root(Some(copy)),
                    Some(side) => arena.set_child(parent, side, Some(copy)),
                }
                for side in [Side::Right, Side::Left] {
                    if let Some(child) = self.arena.child(source, side) {
                        stack.push((child, copy, Some(side)));
                    }
                }
            }
            if let Some(copied_root) = arena.root() {
                let leftmost = arena.minimum(copied_root);
                let rightmost = arena.maximum(copied_root);
                arena.set_leftmost(leftmost);
                arena.set_rightmost(rightmost);
            }
        }
        tracing::trace!(copied = self.length, "cloned tree");
        Self {
            arena,
            length: self.length,
            comparator: self.comparator.clone(),
            projection: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P, C> fmt::Debug for RbTree<T, P, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P, C> IntoIterator for RbTree<T, P, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.arena.drain_in_order())
    }
}

impl<'a, T, P, C> IntoIterator for &'a RbTree<T, P, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P, C> IntoIterator for &'a mut RbTree<T, P, C> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

static_assertions::assert_impl_all!(RbTree<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Position: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(RbTree<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

//! Borrowing and owning iterators over a tree in ascending key order.

use super::node::{Arena, NodeId};
use std::iter::FusedIterator;

// =============================================================================
// Iter
// =============================================================================

/// Iterator over shared references to the elements of an
/// [`RbTree`](super::RbTree), in ascending order.
///
/// Walks the tree through its successor/predecessor links; no auxiliary
/// buffer is built.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, remaining: usize) -> Self {
        Self {
            arena,
            front: arena.leftmost(),
            back: NodeId::SENTINEL,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.front = self.arena.successor(current);
        self.remaining -= 1;
        self.arena.value(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.arena.predecessor(self.back);
        self.remaining -= 1;
        self.arena.value(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Range
// =============================================================================

/// Iterator over the elements between two bound positions, produced by
/// [`RbTree::range`](super::RbTree::range).
pub struct Range<'a, T> {
    arena: &'a Arena<T>,
    /// First node still to be yielded from the front.
    front: NodeId,
    /// One past the last node still to be yielded from the back.
    back: NodeId,
}

impl<'a, T> Range<'a, T> {
    pub(crate) const fn new(arena: &'a Arena<T>, front: NodeId, back: NodeId) -> Self {
        Self { arena, front, back }
    }

    pub(crate) const fn empty(arena: &'a Arena<T>) -> Self {
        Self::new(arena, NodeId::SENTINEL, NodeId::SENTINEL)
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let current = self.front;
        self.front = self.arena.successor(current);
        self.arena.value(current)
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.arena.predecessor(self.back);
        self.arena.value(self.back)
    }
}

impl<T> FusedIterator for Range<'_, T> {}

// =============================================================================
// IterMut
// =============================================================================

/// Iterator over mutable references to the elements of an
/// [`RbTree`](super::RbTree), in ascending order.
///
/// Changing the comparison key of an element through this iterator is a
/// logic error: the tree's order is not re-established.
pub struct IterMut<'a, T> {
    inner: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(arena: &'a mut Arena<T>) -> Self {
        let order = arena.ids_in_order();
        let mut by_slot = arena.values_by_slot();
        let values: Vec<&'a mut T> = order
            .into_iter()
            .filter_map(|id| by_slot.get_mut(id.index()).and_then(Option::take))
            .collect();
        Self {
            inner: values.into_iter(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

/// Owning iterator over the elements of an [`RbTree`](super::RbTree), in
/// ascending order.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

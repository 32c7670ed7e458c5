//! Copyable handles to elements of a tree.

use super::node::NodeId;

/// A handle to one element of an [`RbTree`](super::RbTree), or to its end.
///
/// A `Position` plays the role of a bidirectional iterator: it is obtained
/// from lookups and insertions, moved with [`RbTree::next`](super::RbTree::next)
/// and [`RbTree::prev`](super::RbTree::prev), and dereferenced with
/// [`RbTree::get`](super::RbTree::get).
///
/// Positions are not invalidated by rebalancing. A position goes stale only
/// when the element it refers to is erased (or the tree is cleared); a stale
/// position dereferences to `None` and is treated as the end position by
/// every operation that accepts one.
///
/// # Examples
///
/// ```rust
/// use ordtree::tree::RbTree;
///
/// let mut tree: RbTree<i32> = RbTree::new();
/// let (two, _) = tree.insert_unique(2);
/// tree.insert_unique(1);
/// tree.insert_unique(3);
///
/// assert_eq!(tree.get(tree.prev(two)), Some(&1));
/// assert_eq!(tree.get(tree.next(two)), Some(&3));
/// assert_eq!(tree.next(tree.next(two)), tree.end());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub(crate) node: NodeId,
    pub(crate) generation: u32,
}

impl Position {
    pub(crate) const fn new(node: NodeId, generation: u32) -> Self {
        Self { node, generation }
    }

    /// Returns `true` if this is an end position.
    ///
    /// Every tree's end position is the same value, so this needs no tree.
    #[inline]
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.node.index() == NodeId::SENTINEL.index()
    }
}

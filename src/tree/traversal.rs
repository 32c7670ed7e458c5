//! Successor and predecessor computation over the structural links alone.
//!
//! Traversal forms a ring through the sentinel: stepping forward from the
//! largest node reaches the sentinel, and stepping forward from the sentinel
//! reaches the smallest node. Backward steps mirror this, with the sentinel's
//! predecessor read from the rightmost cache.

use super::node::{Arena, NodeId, Side};

impl<T> Arena<T> {
    /// Leftmost descendant of `id` (inclusive).
    pub(crate) fn minimum(&self, id: NodeId) -> NodeId {
        self.extreme(id, Side::Left)
    }

    /// Rightmost descendant of `id` (inclusive).
    pub(crate) fn maximum(&self, id: NodeId) -> NodeId {
        self.extreme(id, Side::Right)
    }

    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.child(id, side) {
            id = child;
        }
        id
    }

    /// In-order successor of `id`, or the sentinel past the largest node.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        if id == NodeId::SENTINEL {
            return self.leftmost();
        }
        self.step(id, Side::Right)
    }

    /// In-order predecessor of `id`, or the sentinel before the smallest node.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        if id == NodeId::SENTINEL {
            return self.rightmost();
        }
        self.step(id, Side::Left)
    }

    /// One in-order step towards `side`: descend into that subtree if there is
    /// one, otherwise climb while we are the `side` child of our parent.
    fn step(&self, id: NodeId, side: Side) -> NodeId {
        if let Some(child) = self.child(id, side) {
            return self.extreme(child, side.opposite());
        }
        let mut current = id;
        let mut parent = self.parent(current);
        while parent != NodeId::SENTINEL && self.child(parent, side) == Some(current) {
            current = parent;
            parent = self.parent(current);
        }
        parent
    }

    /// Every data node in ascending order.
    pub(crate) fn ids_in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut current = self.leftmost();
        while current != NodeId::SENTINEL {
            order.push(current);
            current = self.successor(current);
        }
        order
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::Color;
    use rstest::rstest;

    /// Builds the tree 20(10(5, 15), 30) by hand.
    fn small_tree() -> (Arena<i32>, [NodeId; 5]) {
        let mut arena = Arena::new();
        let root = arena.allocate(NodeId::SENTINEL, 20, Color::Black);
        let left = arena.allocate(root, 10, Color::Black);
        let right = arena.allocate(root, 30, Color::Black);
        let left_left = arena.allocate(left, 5, Color::Red);
        let left_right = arena.allocate(left, 15, Color::Red);
        arena.set_root(Some(root));
        arena.set_child(root, Side::Left, Some(left));
        arena.set_child(root, Side::Right, Some(right));
        arena.set_child(left, Side::Left, Some(left_left));
        arena.set_child(left, Side::Right, Some(left_right));
        arena.set_leftmost(left_left);
        arena.set_rightmost(right);
        (arena, [left_left, left, left_right, root, right])
    }

    #[rstest]
    fn test_successor_walks_in_order_then_reaches_sentinel() {
        let (arena, ordered) = small_tree();
        for pair in ordered.windows(2) {
            assert_eq!(arena.successor(pair[0]), pair[1]);
        }
        assert_eq!(arena.successor(ordered[4]), NodeId::SENTINEL);
    }

    #[rstest]
    fn test_predecessor_walks_backwards_then_reaches_sentinel() {
        let (arena, ordered) = small_tree();
        for pair in ordered.windows(2) {
            assert_eq!(arena.predecessor(pair[1]), pair[0]);
        }
        assert_eq!(arena.predecessor(ordered[0]), NodeId::SENTINEL);
    }

    #[rstest]
    fn test_sentinel_is_the_ring_joint() {
        let (arena, ordered) = small_tree();
        assert_eq!(arena.successor(NodeId::SENTINEL), ordered[0]);
        assert_eq!(arena.predecessor(NodeId::SENTINEL), ordered[4]);
    }

    #[rstest]
    fn test_empty_arena_ring_is_just_the_sentinel() {
        let arena: Arena<i32> = Arena::new();
        assert_eq!(arena.successor(NodeId::SENTINEL), NodeId::SENTINEL);
        assert_eq!(arena.predecessor(NodeId::SENTINEL), NodeId::SENTINEL);
        assert!(arena.ids_in_order().is_empty());
    }

    #[rstest]
    fn test_minimum_and_maximum_of_subtree() {
        let (arena, ordered) = small_tree();
        assert_eq!(arena.minimum(ordered[3]), ordered[0]);
        assert_eq!(arena.maximum(ordered[1]), ordered[2]);
        assert_eq!(arena.maximum(ordered[4]), ordered[4]);
    }

    #[rstest]
    fn test_ids_in_order_values() {
        let (arena, _) = small_tree();
        let values: Vec<i32> = arena
            .ids_in_order()
            .into_iter()
            .filter_map(|id| arena.value(id).copied())
            .collect();
        assert_eq!(values, vec![5, 10, 15, 20, 30]);
    }
}

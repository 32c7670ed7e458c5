//! Rotations and the red-black fixup passes for insertion and erasure.
//!
//! Every case is written once in terms of a [`Side`] and its opposite, which
//! covers both mirror images of the textbook algorithms.

use super::node::{Arena, Color, NodeId, Side};

impl<T> Arena<T> {
    /// Rotates `pivot` down towards `direction`.
    ///
    /// The child on the opposite side rises into `pivot`'s place; its inner
    /// subtree is handed over to `pivot`. In-order sequence is unchanged.
    pub(crate) fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let Some(riser) = self.child(pivot, direction.opposite()) else {
            return;
        };
        let inner = self.child(riser, direction);
        self.set_child(pivot, direction.opposite(), inner);
        if let Some(inner) = inner {
            self.set_parent(inner, pivot);
        }
        let parent = self.parent(pivot);
        self.replace_child(parent, pivot, Some(riser));
        self.set_child(riser, direction, Some(pivot));
        self.set_parent(pivot, riser);
    }

    /// Restores the red-black rules after `node` was linked in as a red leaf.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = self.parent(node);
            if parent == NodeId::SENTINEL || self.color(parent) == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent is a data node.
            let grandparent = self.parent(parent);
            let side = if self.child(grandparent, Side::Left) == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle
                && self.color(uncle) == Color::Red
            {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.child(parent, side.opposite()) == Some(node) {
                node = parent;
                self.rotate(node, side);
                parent = self.parent(node);
            }
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }
        if let Some(root) = self.root() {
            self.set_color(root, Color::Black);
        }
    }

    /// Unlinks `target` from the tree and rebalances. The node's slot and
    /// payload are left for the caller to release.
    ///
    /// A node with two children is replaced by its in-order successor, which
    /// is moved into `target`'s position; no payload changes nodes, so
    /// positions to the successor stay valid.
    pub(crate) fn detach(&mut self, target: NodeId) {
        if self.leftmost() == target {
            let next = self.successor(target);
            self.set_leftmost(next);
        }
        if self.rightmost() == target {
            let previous = self.predecessor(target);
            self.set_rightmost(previous);
        }

        let left = self.child(target, Side::Left);
        let right = self.child(target, Side::Right);
        let removed_color;
        let replacement;
        let replacement_parent;

        if let (Some(left), Some(right)) = (left, right) {
            let successor = self.minimum(right);
            removed_color = self.color(successor);
            replacement = self.child(successor, Side::Right);
            if self.parent(successor) == target {
                replacement_parent = successor;
            } else {
                replacement_parent = self.parent(successor);
                self.replace_child(replacement_parent, successor, replacement);
                self.set_child(successor, Side::Right, Some(right));
                self.set_parent(right, successor);
            }
            let parent = self.parent(target);
            self.replace_child(parent, target, Some(successor));
            self.set_child(successor, Side::Left, Some(left));
            self.set_parent(left, successor);
            let color = self.color(target);
            self.set_color(successor, color);
        } else {
            removed_color = self.color(target);
            replacement = left.or(right);
            replacement_parent = self.parent(target);
            self.replace_child(replacement_parent, target, replacement);
        }

        if removed_color == Color::Black {
            self.erase_fixup(replacement, replacement_parent);
        }
    }

    /// Pushes the extra black left by a removed black node up the tree until
    /// it can be absorbed. `node` may be a missing child, so its parent is
    /// tracked explicitly.
    fn erase_fixup(&mut self, mut node: Option<NodeId>, mut parent: NodeId) {
        while node != self.root() && !self.is_red(node) {
            let side = if self.child(parent, Side::Left) == node {
                Side::Left
            } else {
                Side::Right
            };
            let opposite = side.opposite();
            // Black-height balance guarantees the sibling exists.
            let Some(mut sibling) = self.child(parent, opposite) else {
                break;
            };

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                let Some(next) = self.child(parent, opposite) else {
                    break;
                };
                sibling = next;
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, opposite);
            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);
                node = Some(parent);
                parent = self.parent(parent);
                continue;
            }

            if !self.is_red(far) {
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, opposite);
                let Some(next) = self.child(parent, opposite) else {
                    break;
                };
                sibling = next;
            }
            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = self.child(sibling, opposite) {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent, side);
            node = self.root();
            break;
        }
        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Links 1 <- 2 -> 3 under the sentinel, all black.
    fn three_nodes() -> (Arena<i32>, NodeId, NodeId, NodeId) {
        let mut arena = Arena::new();
        let middle = arena.allocate(NodeId::SENTINEL, 2, Color::Black);
        let low = arena.allocate(middle, 1, Color::Black);
        let high = arena.allocate(middle, 3, Color::Black);
        arena.set_root(Some(middle));
        arena.set_child(middle, Side::Left, Some(low));
        arena.set_child(middle, Side::Right, Some(high));
        arena.set_leftmost(low);
        arena.set_rightmost(high);
        (arena, low, middle, high)
    }

    fn values(arena: &Arena<i32>) -> Vec<i32> {
        arena
            .ids_in_order()
            .into_iter()
            .filter_map(|id| arena.value(id).copied())
            .collect()
    }

    #[rstest]
    fn test_rotate_left_lifts_right_child_to_root() {
        let (mut arena, low, middle, high) = three_nodes();
        arena.rotate(middle, Side::Left);

        assert_eq!(arena.root(), Some(high));
        assert_eq!(arena.parent(high), NodeId::SENTINEL);
        assert_eq!(arena.child(high, Side::Left), Some(middle));
        assert_eq!(arena.child(middle, Side::Left), Some(low));
        assert_eq!(arena.parent(middle), high);
        assert_eq!(values(&arena), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_rotate_right_lifts_left_child_to_root() {
        let (mut arena, low, middle, high) = three_nodes();
        arena.rotate(middle, Side::Right);

        assert_eq!(arena.root(), Some(low));
        assert_eq!(arena.child(low, Side::Right), Some(middle));
        assert_eq!(arena.child(middle, Side::Right), Some(high));
        assert_eq!(values(&arena), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_rotate_without_riser_is_noop() {
        let (mut arena, low, _, _) = three_nodes();
        arena.rotate(low, Side::Left);
        assert_eq!(values(&arena), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_insert_fixup_straightens_zig_zag() {
        let mut arena = Arena::new();
        let top = arena.allocate(NodeId::SENTINEL, 3, Color::Red);
        arena.set_root(Some(top));
        arena.insert_fixup(top);
        let child = arena.allocate(top, 1, Color::Red);
        arena.set_child(top, Side::Left, Some(child));
        arena.insert_fixup(child);
        let grandchild = arena.allocate(child, 2, Color::Red);
        arena.set_child(child, Side::Right, Some(grandchild));
        arena.insert_fixup(grandchild);

        assert_eq!(arena.root(), Some(grandchild));
        assert_eq!(arena.color(grandchild), Color::Black);
        assert_eq!(arena.color(child), Color::Red);
        assert_eq!(arena.color(top), Color::Red);
    }

    #[rstest]
    fn test_detach_two_children_moves_successor_into_place() {
        let (mut arena, low, middle, high) = three_nodes();
        arena.detach(middle);

        assert_eq!(arena.root(), Some(high));
        assert_eq!(arena.child(high, Side::Left), Some(low));
        assert_eq!(arena.parent(low), high);
        assert_eq!(arena.release(middle), Some(2));
        assert_eq!(values(&arena), vec![1, 3]);
        assert_eq!(arena.value(high), Some(&3));
    }

    #[rstest]
    fn test_detach_extremes_updates_caches() {
        let (mut arena, low, _, high) = three_nodes();
        arena.detach(low);
        arena.release(low);
        assert_eq!(arena.value(arena.leftmost()), Some(&2));

        arena.detach(high);
        arena.release(high);
        assert_eq!(arena.value(arena.rightmost()), Some(&2));
        assert_eq!(arena.leftmost(), arena.rightmost());
    }

    #[rstest]
    fn test_detach_last_node_empties_tree() {
        let mut arena = Arena::new();
        let only = arena.allocate(NodeId::SENTINEL, 7, Color::Black);
        arena.set_root(Some(only));
        arena.set_leftmost(only);
        arena.set_rightmost(only);

        arena.detach(only);

        assert_eq!(arena.root(), None);
        assert_eq!(arena.leftmost(), NodeId::SENTINEL);
        assert_eq!(arena.rightmost(), NodeId::SENTINEL);
    }
}

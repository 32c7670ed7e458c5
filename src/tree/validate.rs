//! Structural self-check for [`RbTree`].

use super::node::{Color, NodeId, Side};
use super::{Compare, KeyProjection, RbTree};
use crate::error::InvariantViolation;

impl<T, P, C> RbTree<T, P, C>
where
    P: KeyProjection<T>,
    C: Compare<P::Key>,
{
    /// Verifies every red-black and bookkeeping invariant of the tree.
    ///
    /// Checks, in order: the root is black and hangs off the sentinel, parent
    /// links mirror child links, no red node has a red child, every path has
    /// the same black height, the element count matches the reachable nodes,
    /// in-order traversal is non-decreasing, and the leftmost/rightmost
    /// caches are the true extremes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordtree::tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = RbTree::new();
    /// for value in 0..100 {
    ///     tree.insert_equal(value % 7);
    /// }
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let result = self.check_structure();
        if let Err(violation) = &result {
            tracing::debug!(%violation, length = self.length, "invariant check failed");
        }
        result
    }

    fn check_structure(&self) -> Result<(), InvariantViolation> {
        let reachable = match self.arena.root() {
            None => 0,
            Some(root) => {
                if self.arena.color(root) == Color::Red {
                    return Err(InvariantViolation::RedRoot);
                }
                if self.arena.parent(root) != NodeId::SENTINEL {
                    return Err(InvariantViolation::Link);
                }
                let mut count = 0;
                self.black_height(root, &mut count)?;
                count
            }
        };
        if reachable != self.length {
            return Err(InvariantViolation::Length {
                expected: self.length,
                actual: reachable,
            });
        }
        self.check_order()?;
        self.check_caches()
    }

    /// Returns the black height of the subtree at `id`, counting `id`
    /// itself, and adds the subtree's node count to `count`.
    fn black_height(&self, id: NodeId, count: &mut usize) -> Result<usize, InvariantViolation> {
        *count += 1;
        let red = self.arena.color(id) == Color::Red;
        let mut heights = [0_usize; 2];
        for (slot, side) in heights.iter_mut().zip([Side::Left, Side::Right]) {
            let Some(child) = self.arena.child(id, side) else {
                continue;
            };
            if self.arena.parent(child) != id {
                return Err(InvariantViolation::Link);
            }
            if red && self.arena.color(child) == Color::Red {
                return Err(InvariantViolation::RedRed);
            }
            *slot = self.black_height(child, count)?;
        }
        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeight { left, right });
        }
        Ok(left + usize::from(!red))
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut previous = self.arena.leftmost();
        if previous == NodeId::SENTINEL {
            return Ok(());
        }
        let mut current = self.arena.successor(previous);
        while current != NodeId::SENTINEL {
            if self.node_less_than_node(current, previous) {
                return Err(InvariantViolation::Order);
            }
            previous = current;
            current = self.arena.successor(current);
        }
        Ok(())
    }

    fn node_less_than_node(&self, left: NodeId, right: NodeId) -> bool {
        match (self.arena.value(left), self.arena.value(right)) {
            (Some(left), Some(right)) => self.comparator.less(P::key(left), P::key(right)),
            _ => false,
        }
    }

    fn check_caches(&self) -> Result<(), InvariantViolation> {
        let root = self.arena.root();
        let leftmost = root.map_or(NodeId::SENTINEL, |root| self.arena.minimum(root));
        let rightmost = root.map_or(NodeId::SENTINEL, |root| self.arena.maximum(root));
        if self.arena.leftmost() == leftmost && self.arena.rightmost() == rightmost {
            Ok(())
        } else {
            Err(InvariantViolation::Cache)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

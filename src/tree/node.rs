//! Node model and the arena that owns every node of a tree.
//!
//! Nodes live in a slot vector and refer to each other by [`NodeId`]. Child
//! links are the ownership edges of the tree; the parent link is a plain
//! back-reference used for traversal and rebalancing only. Releasing a node
//! never follows parent links.
//!
//! Slot 0 is the sentinel. Its `parent` slot holds the data root (or `None`
//! for an empty tree) and its two child slots cache the leftmost and
//! rightmost data nodes, pointing back at the sentinel when the tree is empty.

// =============================================================================
// Color and Side
// =============================================================================

/// The color of a red-black node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Stable address of a node inside its arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The permanently allocated header node.
    pub(crate) const SENTINEL: Self = Self(0);

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A single arena slot.
///
/// Data nodes hold `Some(value)`; the sentinel and vacant slots hold `None`.
/// `generation` is bumped whenever the slot is released so that outstanding
/// positions to the old occupant can be told apart from the new one.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: [Option<NodeId>; 2],
    pub(crate) generation: u32,
    pub(crate) value: Option<T>,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            color: Color::Red,
            parent: None,
            children: [Some(NodeId::SENTINEL), Some(NodeId::SENTINEL)],
            generation: 0,
            value: None,
        }
    }
}

// =============================================================================
// Arena Definition
// =============================================================================

/// Slot storage for the sentinel and every data node of one tree.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Node::sentinel());
        Self {
            slots,
            free: Vec::new(),
        }
    }

    /// Stores `value` in a fresh, unlinked node whose parent link is `parent`.
    ///
    /// The slot is obtained before any existing link is touched, so a failed
    /// allocation leaves the tree exactly as it was.
    pub(crate) fn allocate(&mut self, parent: NodeId, value: T, color: Color) -> NodeId {
        if let Some(id) = self.free.pop() {
            let node = &mut self.slots[id.index()];
            node.color = color;
            node.parent = Some(parent);
            node.children = [None, None];
            node.value = Some(value);
            id
        } else {
            let id = NodeId(self.slots.len());
            self.slots.push(Node {
                color,
                parent: Some(parent),
                children: [None, None],
                generation: 0,
                value: Some(value),
            });
            id
        }
    }

    /// Takes the payload out of a node that is no longer linked into the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        if id == NodeId::SENTINEL {
            return None;
        }
        let node = self.slots.get_mut(id.index())?;
        let value = node.value.take()?;
        node.generation = node.generation.wrapping_add(1);
        node.parent = None;
        node.children = [None, None];
        self.free.push(id);
        Some(value)
    }

    /// Drops every payload and resets the sentinel to the empty state.
    ///
    /// Slots are kept for reuse; every occupied one has its generation bumped.
    pub(crate) fn clear(&mut self) {
        for node in self.slots.iter_mut().skip(1) {
            if node.value.take().is_some() {
                node.generation = node.generation.wrapping_add(1);
            }
            node.parent = None;
            node.children = [None, None];
        }
        self.free.clear();
        self.free.extend((1..self.slots.len()).rev().map(NodeId));
        self.set_root(None);
        self.set_leftmost(NodeId::SENTINEL);
        self.set_rightmost(NodeId::SENTINEL);
    }

    /// Moves every payload out in ascending order and leaves the arena empty.
    pub(crate) fn drain_in_order(&mut self) -> Vec<T> {
        let order = self.ids_in_order();
        let values = order
            .into_iter()
            .filter_map(|id| {
                let node = &mut self.slots[id.index()];
                node.generation = node.generation.wrapping_add(1);
                node.value.take()
            })
            .collect();
        self.clear();
        values
    }

    /// Mutable references to every payload, indexed by slot.
    pub(crate) fn values_by_slot(&mut self) -> Vec<Option<&mut T>> {
        self.slots
            .iter_mut()
            .map(|node| node.value.as_mut())
            .collect()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.slots[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.slots[id.index()]
    }

    /// Looks up a slot by raw index, for validating externally held positions.
    pub(crate) fn slot(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index)
    }

    // =========================================================================
    // Link Accessors
    // =========================================================================

    pub(crate) fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).value.as_ref()
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.node(id).children[side.index()]
    }

    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        self.node_mut(id).children[side.index()] = child;
    }

    /// Parent of a data node; the data root's parent is the sentinel.
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent.unwrap_or(NodeId::SENTINEL)
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(id).parent = Some(parent);
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Missing children count as black.
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.color(id) == Color::Red)
    }

    // =========================================================================
    // Sentinel Accessors
    // =========================================================================

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.node(NodeId::SENTINEL).parent
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.node_mut(NodeId::SENTINEL).parent = root;
    }

    pub(crate) fn leftmost(&self) -> NodeId {
        self.child(NodeId::SENTINEL, Side::Left)
            .unwrap_or(NodeId::SENTINEL)
    }

    pub(crate) fn set_leftmost(&mut self, id: NodeId) {
        self.set_child(NodeId::SENTINEL, Side::Left, Some(id));
    }

    pub(crate) fn rightmost(&self) -> NodeId {
        self.child(NodeId::SENTINEL, Side::Right)
            .unwrap_or(NodeId::SENTINEL)
    }

    pub(crate) fn set_rightmost(&mut self, id: NodeId) {
        self.set_child(NodeId::SENTINEL, Side::Right, Some(id));
    }

    /// Points whichever link of `parent` referenced `old` at `new` instead,
    /// and fixes `new`'s parent link. A sentinel parent means `old` was the root.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: Option<NodeId>) {
        if parent == NodeId::SENTINEL {
            self.set_root(new);
        } else if self.child(parent, Side::Left) == Some(old) {
            self.set_child(parent, Side::Left, new);
        } else {
            self.set_child(parent, Side::Right, new);
        }
        if let Some(new) = new {
            self.set_parent(new, parent);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

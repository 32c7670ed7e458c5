//! Error types for the tree engine and the ordered containers.
//!
//! Absence is not an error in this crate: lookups report it through the end
//! [`Position`](crate::tree::Position) or `None`. The types here cover the two
//! conditions that are surfaced to callers as values:
//!
//! - [`OutOfRangeError`]: a bounds-checked accessor was asked for a key that
//!   is not present.
//! - [`InvariantViolation`]: a structural check of a tree found a broken
//!   red-black or bookkeeping invariant.

use std::fmt;

/// Returned by bounds-checked keyed accessors when the key is absent.
///
/// # Examples
///
/// ```rust
/// use ordtree::error::OutOfRangeError;
///
/// let error = OutOfRangeError { accessor: "OrderedMap::at" };
/// assert_eq!(format!("{error}"), "OrderedMap::at: key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeError {
    /// The accessor that rejected the lookup.
    pub accessor: &'static str,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: key not found", self.accessor)
    }
}

impl std::error::Error for OutOfRangeError {}

/// A broken structural invariant reported by
/// [`RbTree::check_invariants`](crate::tree::RbTree::check_invariants).
///
/// A correctly functioning tree never produces one of these; they exist so
/// tests and debugging sessions can pinpoint which rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// The root of the data tree is red.
    RedRoot,
    /// A red node has a red child.
    RedRed,
    /// Two sibling subtrees have different black heights.
    BlackHeight {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// In-order traversal found an element ordered before its predecessor.
    Order,
    /// The sentinel's leftmost or rightmost cache is not the true extreme.
    Cache,
    /// A child's parent link does not point back at its parent.
    Link,
    /// The stored element count disagrees with the number of data nodes.
    Length {
        /// The count the tree reports.
        expected: usize,
        /// The number of nodes actually reachable from the root.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::RedRed => write!(formatter, "red node has a red child"),
            Self::BlackHeight { left, right } => write!(
                formatter,
                "black height mismatch: left subtree {left}, right subtree {right}"
            ),
            Self::Order => write!(formatter, "in-order traversal is not sorted"),
            Self::Cache => write!(formatter, "sentinel min/max cache is stale"),
            Self::Link => write!(formatter, "parent link does not match child link"),
            Self::Length { expected, actual } => write!(
                formatter,
                "element count mismatch: recorded {expected}, reachable {actual}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

// =============================================================================
// Tests
// =============================================================================

//! # ordtree
//!
//! An in-memory, order-preserving storage engine built on a red-black tree,
//! and the ordered containers that sit on top of it.
//!
//! ## Overview
//!
//! One balanced-tree engine, [`RbTree`](tree::RbTree), serves every ordered
//! container in this crate. It is parameterized by:
//!
//! - a **key projection** ([`Identity`](tree::Identity) for set-like payloads,
//!   [`FirstOfPair`](tree::FirstOfPair) for map-like `(K, V)` payloads), and
//! - a **comparator** implementing a strict weak order
//!   ([`NaturalOrder`](tree::NaturalOrder), [`ReverseOrder`](tree::ReverseOrder),
//!   or any `Fn(&K, &K) -> bool`).
//!
//! Two insertion policies let the same engine back unique and multi-key
//! containers: `insert_unique` rejects equivalent keys, `insert_equal` always
//! inserts and keeps equivalent keys in insertion order.
//!
//! Traversal is expressed through [`Position`](tree::Position) handles that
//! behave like bidirectional iterators: they stay valid across unrelated
//! insertions and erasures and only go stale when their own element is erased.
//!
//! ## Feature Flags
//!
//! - `tree`: The balanced-tree engine
//! - `collections`: [`OrderedSet`](collections::OrderedSet),
//!   [`OrderedMultiSet`](collections::OrderedMultiSet) and
//!   [`OrderedMap`](collections::OrderedMap)
//!
//! ## Example
//!
//! ```rust
//! use ordtree::prelude::*;
//!
//! let mut tree: RbTree<i32> = RbTree::new();
//! for value in [534_789, 2_479_056, 987_654, 1, 35_674] {
//!     tree.insert_unique(value);
//! }
//!
//! let sorted: Vec<&i32> = tree.iter().collect();
//! assert_eq!(sorted, vec![&1, &35_674, &534_789, &987_654, &2_479_056]);
//! assert!(tree.check_invariants().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordtree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "tree")]
    pub use crate::tree::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "collections")]
pub mod collections;

//! Ordered containers built on the [`RbTree`](crate::tree::RbTree) engine.
//!
//! Each container is a thin adapter that fixes a key projection and an
//! insertion policy:
//!
//! - [`OrderedSet`]: unique keys, the element is its own key
//! - [`OrderedMultiSet`]: equivalent keys allowed, kept in insertion order
//! - [`OrderedMap`]: unique keys mapped to values
//!
//! All of them hand out [`Position`](crate::tree::Position) handles from
//! lookups and insertions; a position stays valid until its own element is
//! erased.
//!
//! # Examples
//!
//! ## `OrderedSet`
//!
//! ```rust
//! use ordtree::collections::OrderedSet;
//!
//! let mut set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
//! assert!(set.insert(4).1);
//! assert!(!set.insert(4).1);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
//! ```
//!
//! ## `OrderedMultiSet`
//!
//! ```rust
//! use ordtree::collections::OrderedMultiSet;
//!
//! let multiset: OrderedMultiSet<i32> = [1, 3, 4, 2, 2].into_iter().collect();
//! assert_eq!(multiset.count(&2), 2);
//! assert_eq!(multiset.len(), 5);
//! ```
//!
//! ## `OrderedMap`
//!
//! ```rust
//! use ordtree::collections::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("one", 1);
//! *map.get_or_insert_default("two") += 2;
//! assert_eq!(map.at(&"two"), Ok(&2));
//! assert!(map.at(&"three").is_err());
//! ```

mod map;
mod multiset;
mod set;

pub use map::{Keys, MapIntoIter, MapIter, MapIterMut, OrderedMap, Values, ValuesMut};
pub use multiset::OrderedMultiSet;
pub use set::OrderedSet;

use std::fmt;

/// Writes `items` as `open item, item, ... close` with each item rendered by
/// `write_item`.
fn write_delimited<I, F>(
    formatter: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: I,
    mut write_item: F,
) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    write!(formatter, "{open}")?;
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write_item(formatter, item)?;
    }
    write!(formatter, "{close}")
}

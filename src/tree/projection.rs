//! Key projection and comparison strategies.
//!
//! The engine never inspects a payload directly. It asks a
//! [`KeyProjection`] for the comparison key and a [`Compare`] for the
//! order between two keys. Two keys are *equivalent* when neither is less
//! than the other; identity or `PartialEq` plays no part.

use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Key Projection
// =============================================================================

/// Extracts the comparison key from a stored payload.
///
/// # Examples
///
/// ```rust
/// use ordtree::tree::{FirstOfPair, Identity, KeyProjection};
///
/// assert_eq!(<Identity as KeyProjection<i32>>::key(&7), &7);
/// assert_eq!(<FirstOfPair as KeyProjection<(i32, &str)>>::key(&(7, "seven")), &7);
/// ```
pub trait KeyProjection<T> {
    /// The type the comparator orders.
    type Key: ?Sized;

    /// Returns the comparison key of `value`.
    fn key(value: &T) -> &Self::Key;
}

/// Projection for set-like payloads: the payload is its own key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> KeyProjection<T> for Identity {
    type Key = T;

    #[inline]
    fn key(value: &T) -> &T {
        value
    }
}

/// Projection for map-like `(key, value)` payloads: the first component is
/// the key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FirstOfPair;

impl<K, V> KeyProjection<(K, V)> for FirstOfPair {
    type Key = K;

    #[inline]
    fn key(value: &(K, V)) -> &K {
        &value.0
    }
}

// =============================================================================
// Comparator
// =============================================================================

/// A strict weak order over keys.
///
/// Implementations must be irreflexive (`!less(a, a)`) and transitive, and
/// equivalence (`!less(a, b) && !less(b, a)`) must be transitive as well.
/// Any `Fn(&K, &K) -> bool` closure is a comparator.
///
/// # Examples
///
/// ```rust
/// use ordtree::tree::{Compare, NaturalOrder};
///
/// assert!(NaturalOrder.less(&1, &2));
/// assert!(NaturalOrder.equivalent(&2, &2));
///
/// let by_length = |left: &&str, right: &&str| left.len() < right.len();
/// assert!(by_length.equivalent(&"abc", &"xyz"));
/// ```
pub trait Compare<K: ?Sized> {
    /// Returns `true` if `left` is ordered strictly before `right`.
    fn less(&self, left: &K, right: &K) -> bool;

    /// Returns `true` if neither key is ordered before the other.
    #[inline]
    fn equivalent(&self, left: &K, right: &K) -> bool {
        !self.less(left, right) && !self.less(right, left)
    }
}

/// Ascending order via [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Compare<K> for NaturalOrder {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left < right
    }
}

/// Descending order via [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Compare<K> for ReverseOrder {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        right < left
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

/// Orders keys by a derived sort key, e.g. case-insensitively.
///
/// # Examples
///
/// ```rust
/// use ordtree::tree::{Compare, OrderBy};
///
/// let by_abs = OrderBy::new(|value: &i32| value.abs());
/// assert!(by_abs.less(&1, &-2));
/// assert!(by_abs.equivalent(&-3, &3));
/// ```
pub struct OrderBy<K: ?Sized, S, F> {
    extract: F,
    marker: PhantomData<fn(&K) -> S>,
}

impl<K: ?Sized, S, F> OrderBy<K, S, F>
where
    F: Fn(&K) -> S,
    S: Ord,
{
    /// Creates a comparator that orders by `extract(key)`.
    pub const fn new(extract: F) -> Self {
        Self {
            extract,
            marker: PhantomData,
        }
    }
}

impl<K: ?Sized, S, F> Compare<K> for OrderBy<K, S, F>
where
    F: Fn(&K) -> S,
    S: Ord,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        (self.extract)(left) < (self.extract)(right)
    }
}

impl<K: ?Sized, S, F: Clone> Clone for OrderBy<K, S, F> {
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            marker: PhantomData,
        }
    }
}

impl<K: ?Sized, S, F> fmt::Debug for OrderBy<K, S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OrderBy").finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Key orderings.
//!
//! A [`SkipMap`](crate::SkipMap) never calls `Ord` directly; every key
//! comparison goes through a [`Comparator`]. The comparator must be a strict
//! total order that stays stable for as long as a key lives in the map. The
//! map stays memory safe under a broken comparator, but lookups and
//! iteration order are then meaningless.

use std::cmp::Ordering;
use std::fmt;

/// A total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation. This is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> Comparator<K> for OrdComparator {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Orders keys by comparing their `Display` renderings as strings.
///
/// Handy for key types without an `Ord` impl, but note that numbers sort
/// lexicographically: `10` comes before `9`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayComparator;

impl<K: fmt::Display + ?Sized> Comparator<K> for DisplayComparator {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.to_string().cmp(&right.to_string())
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

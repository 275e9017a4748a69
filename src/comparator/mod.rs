//! The ordering strategy a [`RangeQueryTree`](crate::RangeQueryTree) is built with.
//!
//! A comparator decides which of two elements is "better". `Less` or `Equal`
//! means the left argument is at least as good as the right one, so the tree
//! keeps the left argument on ties. It must be a total, consistent ordering,
//! otherwise queries may return any element of the range.

pub mod example_comparators;

use std::cmp::Ordering;

/// This trait represents the ordering that the tree optimizes for.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator, so a min-tree over
/// floats is just `|a: &f64, b: &f64| a.total_cmp(b)`. For the common cases see
/// [`example_comparators`].
pub trait Comparator<T> {
    /// Compares two elements. `Greater` means `right` is strictly better.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Whether `left` wins against `right`. Ties go to `left`.
    fn prefers_left(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

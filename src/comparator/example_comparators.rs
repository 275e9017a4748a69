//! Ready-made comparators.

use super::*;

/// Smaller values are better. Builds a min-tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: Ord> Comparator<T> for Ascending {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Bigger values are better. Builds a max-tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord> Comparator<T> for Descending {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

/// Orders elements by a key extracted from them, smallest key first.
///
/// Elements with equal keys tie, so queries return the leftmost of them.
/// ```
/// use range_query_tree::{ByKey, RangeQueryTree};
///
/// let people = [("ann", 31), ("bob", 25), ("cy", 25), ("dee", 40)];
/// let tree = RangeQueryTree::from_slice(&people, ByKey(|p: &(&str, u32)| p.1)).unwrap();
/// assert_eq!(tree.get_value(0, 3).unwrap().0, "bob");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left).cmp(&(self.0)(right))
    }
}

/// Flips another comparator: what was worst becomes best.
///
/// Ties stay ties, so the leftmost element still wins them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(left, right).reverse()
    }
}

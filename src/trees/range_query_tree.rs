//! The range query tree. See [`RangeQueryTree`].

use std::fmt::Debug;
use std::ops::{Bound, RangeBounds};

use log::{debug, trace};

use super::layout::*;
use crate::comparator::Comparator;
use crate::error::{Result, TreeError};

const NO_WINNER_ERROR: &str = "invariant violated: no node covers a valid query range";

/// A segment tree over a fixed number of elements.
///
/// Every internal node stores a copy of the best element in its subtree, as
/// decided by the comparator `C`. Ties go to the left child, so a query always
/// returns the leftmost of several equally good elements.
///
/// The tree starts out unbuilt. [`RangeQueryTree::prepare`] (or
/// [`RangeQueryTree::from_slice`]) builds it, after which elements can be
/// replaced with [`RangeQueryTree::set_leaf`] but never added or removed.
///
/// ```
/// use range_query_tree::{Descending, RangeQueryTree};
///
/// let mut tree = RangeQueryTree::new();
/// tree.prepare(&[4, 8, 15, 16, 23, 42], Descending).unwrap();
/// assert_eq!(*tree.get_value(0, 3).unwrap(), 16);
///
/// tree.set_leaf(1, 100).unwrap();
/// assert_eq!(*tree.get_value(0, 3).unwrap(), 100);
/// assert_eq!(*tree.get_value(2, 5).unwrap(), 42);
/// # tree.assert_correctness();
/// ```
#[derive(Clone, Debug)]
pub struct RangeQueryTree<T, C> {
    /// The number of elements.
    len: usize,
    /// The number of leaves, a power of two. Leaves past `len` are padding and aren't stored.
    leaf_count: usize,
    /// The nodes, in 1-based heap order. Index 0 is unused.
    data: Vec<T>,
    /// `None` until the tree is prepared.
    comparator: Option<C>,
}

impl<T, C> RangeQueryTree<T, C> {
    /// Creates an unbuilt tree. It has to be prepared before it can be used.
    pub fn new() -> Self {
        RangeQueryTree {
            len: 0,
            leaf_count: 0,
            data: vec![],
            comparator: None,
        }
    }

    /// Whether [`RangeQueryTree::prepare`] has succeeded on this tree.
    pub fn is_ready(&self) -> bool {
        self.comparator.is_some()
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of leaves: the smallest power of two that fits all the elements.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The number of slots in the underlying storage: elements plus leaves.
    pub fn storage_len(&self) -> usize {
        self.data.len()
    }

    pub fn comparator(&self) -> Option<&C> {
        self.comparator.as_ref()
    }

    /// The current elements, in order.
    pub fn leaves(&self) -> &[T] {
        &self.data[self.leaf_count..]
    }

    /// The current element at `index`, if there is one.
    pub fn get_leaf(&self, index: usize) -> Option<&T> {
        self.leaves().get(index)
    }

    /// The best element of the whole tree. `None` if the tree isn't prepared.
    pub fn best(&self) -> Option<&T> {
        self.data.get(1)
    }

    /// Direct access to the storage slot `index`, in heap order (the root is `1`,
    /// the children of `i` are `2i` and `2i + 1`, and element `j` is at
    /// `leaf_count() + j`). Returns `None` past the end of the storage.
    ///
    /// Slot `0` and internal nodes with no elements under them hold unspecified values.
    pub fn get_raw_data(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable access to the storage slot `index`. See [`RangeQueryTree::get_raw_data`].
    ///
    /// Writing through this reference doesn't update the nodes above the slot,
    /// so queries may return stale results until the affected leaves are set again.
    pub fn get_raw_data_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }
}

impl<T, C> Default for RangeQueryTree<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Comparator<T>> RangeQueryTree<T, C> {
    /// Creates a tree over `data` ordered by `comparator`.
    /// O(N).
    pub fn from_slice(data: &[T], comparator: C) -> Result<Self> {
        let mut tree = Self::new();
        tree.prepare(data, comparator)?;
        Ok(tree)
    }

    /// Builds the tree over `data` ordered by `comparator`, discarding anything
    /// the tree held before. Fails if `data` is empty, in which case the tree is
    /// left as it was.
    /// O(N).
    pub fn prepare(&mut self, data: &[T], comparator: C) -> Result<()> {
        let first = data.first().ok_or_else(|| {
            TreeError::InvalidArgument(String::from("cannot build a tree over an empty sequence"))
        })?;
        let len = data.len();
        let leaf_count = leaf_count_for(len);

        // Everything before the leaves starts out as a copy of the first element.
        // The valid internal nodes are all overwritten below.
        let mut storage = Vec::with_capacity(storage_len_for(len));
        storage.resize(leaf_count, first.clone());
        storage.extend_from_slice(data);

        for (node, child_last) in internal_nodes(leaf_count, len) {
            pull_up(&mut storage, &comparator, node, child_last);
        }

        self.len = len;
        self.leaf_count = leaf_count;
        self.data = storage;
        self.comparator = Some(comparator);
        debug!(
            "prepared a range query tree over {} elements with {} leaves",
            len, leaf_count
        );
        Ok(())
    }

    /// Replaces the element at `index` with `value`, and recalculates its ancestors.
    /// O(log N)
    pub fn set_leaf(&mut self, index: usize, value: T) -> Result<()> {
        let comparator = self.comparator.as_ref().ok_or(TreeError::NotPrepared)?;
        if index >= self.len {
            return Err(TreeError::OutOfRange {
                index,
                len: self.len,
            });
        }

        self.data[leaf_node(self.leaf_count, index)] = value;
        for (node, child_last) in ancestors(self.leaf_count, self.len, index) {
            pull_up(&mut self.data, comparator, node, child_last);
        }
        trace!("set element {}", index);
        Ok(())
    }
}

impl<T, C: Comparator<T>> RangeQueryTree<T, C> {
    /// Returns the best element among `from..=to`.
    /// If several elements are equally good, returns the leftmost one.
    /// O(log N)
    ///
    /// Fails if `from > to` or `to` is out of bounds.
    pub fn get_value(&self, from: usize, to: usize) -> Result<&T> {
        let comparator = self.comparator.as_ref().ok_or(TreeError::NotPrepared)?;
        if from > to {
            return Err(TreeError::InvalidArgument(format!(
                "start of range {from} is bigger than end of range {to}"
            )));
        }
        if to >= self.len {
            return Err(TreeError::InvalidArgument(format!(
                "end of range {to} is out of bounds of tree length {}",
                self.len
            )));
        }

        // The search counts leaves from 1.
        let node = self
            .locate(comparator, from + 1, to + 1, 1, 1, self.leaf_count)
            .expect(NO_WINNER_ERROR);
        trace!("query {}..={} answered by node {}", from, to, node);
        Ok(&self.data[node])
    }

    /// Same as [`RangeQueryTree::get_value`], but takes any range of element indices.
    /// ```
    /// use range_query_tree::{Ascending, RangeQueryTree};
    ///
    /// let tree = RangeQueryTree::from_slice(&[5, 3, 8, 1, 9], Ascending).unwrap();
    /// assert_eq!(*tree.query(..).unwrap(), 1);
    /// assert_eq!(*tree.query(0..3).unwrap(), 3);
    /// assert_eq!(*tree.query(4..=4).unwrap(), 9);
    /// assert!(tree.query(2..2).is_err());
    /// ```
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> Result<&T> {
        if !self.is_ready() {
            return Err(TreeError::NotPrepared);
        }
        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(self.len),
        };
        match (start, end) {
            (Some(start), Some(end)) if start < end => self.get_value(start, end - 1),
            _ => Err(TreeError::InvalidArgument(String::from(
                "cannot query an empty range",
            ))),
        }
    }

    /// Finds the node with the best element among leaves `from..=to`, searching
    /// the subtree of `node`, which spans leaves `left..=right`.
    /// All leaf positions here count from 1.
    ///
    /// O(k + log N), where k is the number of subtrees contained in the range.
    fn locate(
        &self,
        comparator: &C,
        from: usize,
        to: usize,
        node: usize,
        left: usize,
        right: usize,
    ) -> Option<usize> {
        if right < from || to < left {
            return None;
        }
        if from <= left && right <= to {
            return Some(node);
        }
        let center = (left + right) / 2;
        let first = self.locate(comparator, from, to, left_child(node), left, center);
        let second = self.locate(comparator, from, to, right_child(node), center + 1, right);
        match (first, second) {
            (Some(i), Some(j)) if !comparator.prefers_left(&self.data[i], &self.data[j]) => Some(j),
            (Some(i), _) => Some(i),
            (None, j) => j,
        }
    }

    /// Checks that every internal node holds the best of its children.
    /// If it doesn't, panics.
    pub fn assert_correctness(&self)
    where
        T: PartialEq + Debug,
    {
        let comparator = match self.comparator.as_ref() {
            Some(comparator) => comparator,
            None => {
                assert!(self.data.is_empty(), "unprepared tree has storage");
                return;
            }
        };
        assert_eq!(self.leaf_count, leaf_count_for(self.len));
        assert_eq!(self.data.len(), storage_len_for(self.len));
        for (node, child_last) in internal_nodes(self.leaf_count, self.len) {
            let winner = winning_child(&self.data, comparator, node, child_last);
            assert_eq!(
                self.data[node], self.data[winner],
                "node {node} doesn't hold the best element of its children"
            );
        }
    }
}

/// The child of `node` holding the better element. The right child only
/// competes if it is a valid node, i.e. not past `child_last`.
fn winning_child<T, C: Comparator<T>>(
    data: &[T],
    comparator: &C,
    node: usize,
    child_last: usize,
) -> usize {
    let left = left_child(node);
    let right = right_child(node);
    if right <= child_last && !comparator.prefers_left(&data[left], &data[right]) {
        right
    } else {
        left
    }
}

/// Recalculates `node` from its children.
fn pull_up<T: Clone, C: Comparator<T>>(
    data: &mut [T],
    comparator: &C,
    node: usize,
    child_last: usize,
) {
    let winner = winning_child(data, comparator, node, child_last);
    data[node] = data[winner].clone();
}

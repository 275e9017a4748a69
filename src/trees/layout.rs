//! Index arithmetic for the flattened tree.
//!
//! The tree lives in one array using 1-based binary heap numbering: the root is
//! node `1`, the children of node `i` are `2i` and `2i + 1`, and index `0` is
//! never used. With `n` leaves (a power of two) the leaves occupy `n..2n`, but
//! only the first `len` of them hold elements, so the array stops at `n + len`.
//!
//! On every level the valid nodes form a prefix of the level. `last_leaf`
//! gives the last valid node of the leaf level, and halving it gives the last
//! valid node of the level above.

/// Number of leaves needed for `len` elements: the smallest power of two `>= len`, at least 1.
pub fn leaf_count_for(len: usize) -> usize {
    len.next_power_of_two()
}

/// Number of slots in the storage array for `len` elements.
pub fn storage_len_for(len: usize) -> usize {
    len + leaf_count_for(len)
}

/// The tree node that holds element `index`.
pub fn leaf_node(leaf_count: usize, index: usize) -> usize {
    leaf_count + index
}

/// The last node of the leaf level that holds an element.
pub fn last_leaf(leaf_count: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    leaf_count + len - 1
}

pub fn parent(node: usize) -> usize {
    node / 2
}

pub fn left_child(node: usize) -> usize {
    node * 2
}

pub fn right_child(node: usize) -> usize {
    node * 2 + 1
}

/// The valid internal nodes, bottom-up and level by level, each paired with the
/// last valid node of its children's level. A node's right child only holds
/// elements if it is not past that bound.
pub fn internal_nodes(leaf_count: usize, len: usize) -> impl Iterator<Item = (usize, usize)> {
    let levels = move || {
        std::iter::successors(Some((leaf_count, last_leaf(leaf_count, len))), |&(first, last)| {
            (first > 1).then(|| (parent(first), parent(last)))
        })
    };
    levels()
        .zip(levels().skip(1))
        .flat_map(|((_, child_last), (first, last))| (first..=last).map(move |node| (node, child_last)))
}

/// The ancestors of element `index`'s leaf, from its parent up to the root, each
/// paired with the last valid node of its children's level.
pub fn ancestors(leaf_count: usize, len: usize, index: usize) -> impl Iterator<Item = (usize, usize)> {
    let path = move || {
        std::iter::successors(
            Some((leaf_node(leaf_count, index), last_leaf(leaf_count, len))),
            |&(node, last)| (node > 1).then(|| (parent(node), parent(last))),
        )
    };
    path()
        .zip(path().skip(1))
        .map(|((_, child_last), (node, _))| (node, child_last))
}

//! The tree itself, and the index arithmetic of its flattened layout.

pub mod layout;
pub mod range_query_tree;

//! Errors returned at the API boundary of [`RangeQueryTree`](crate::RangeQueryTree).
//!
//! Only precondition violations are reported here. A query that fails to find a
//! winning node over a valid range means the tree invariant was broken, and
//! panics instead.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Construction over an empty sequence, or a query range that is reversed,
    /// empty, or reaches past the last element.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A point update addressed an element that doesn't exist.
    #[error("index {index} is out of range for a tree of {len} elements")]
    OutOfRange { index: usize, len: usize },
    /// The tree has not been built with `prepare` yet.
    #[error("the tree has not been prepared")]
    NotPrepared,
}

pub type Result<T> = std::result::Result<T, TreeError>;

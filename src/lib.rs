//! A fixed-size segment tree answering "best value in a range" queries.
//!
//! The tree is built once over a sequence of elements and an injected
//! [`Comparator`]. Afterwards single elements can be replaced in `O(log n)`
//! and the best element of any contiguous range can be found in `O(log n)`.
//!
//! ```
//! use range_query_tree::{Ascending, RangeQueryTree};
//!
//! let tree = RangeQueryTree::from_slice(&[7, 2, 4, 3, 9, 8, 0, 6, 5, 1], Ascending).unwrap();
//! assert_eq!(*tree.get_value(1, 2).unwrap(), 2);
//! assert_eq!(*tree.get_value(3, 7).unwrap(), 0);
//! assert_eq!(*tree.query(7..).unwrap(), 1);
//! assert_eq!(*tree.query(..).unwrap(), 0);
//! ```

pub mod comparator;
pub mod error;
pub mod trees;

pub use comparator::example_comparators::*;
pub use comparator::Comparator;
pub use error::{Result, TreeError};
pub use trees::range_query_tree::RangeQueryTree;

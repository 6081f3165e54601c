//! aggtree provides a fixed-size aggregation tree (segment tree) for offline range queries.
//!
//! An [AggregationTree] is built once from a sequence and answers range aggregation queries and
//! single element updates in `O(log n)` time. What is aggregated is decided by an [Aggregator]
//! which lifts every input element into a partial aggregate and combines two neighbouring
//! partial aggregates. The combine function must be associative but does not have to be
//! commutative: partials are always combined in sequence order.
//!
//! # Example
//!
//! ```
//! use aggtree::{AggregationTree, aggregator::sum::U64SumAggregator};
//!
//! let mut tree = AggregationTree::new(&[1u64, 2, 3, 4, 5], U64SumAggregator);
//! assert_eq!(tree.query(0, 4), Ok(15));
//! assert_eq!(tree.query(1, 3), Ok(9));
//!
//! tree.set(2, 10).unwrap();
//! assert_eq!(tree.query(1, 3), Ok(16));
//! assert_eq!(tree.query_range(..), Ok(22));
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(nonstandard_style, missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

use core::{fmt, ops::Bound};

/// Aggregation interface and pre-defined aggregators (SUM, MIN, MAX)
pub mod aggregator;
/// Profiling stats for [AggregationTree]
#[cfg(feature = "profiler")]
pub mod stats;

mod tree;

pub use aggregator::{Aggregator, FnAggregator};
pub use tree::AggregationTree;

/// A type containing error variants that may arise when using an [AggregationTree]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested range is empty or reaches outside the tree
    ///
    /// [AggregationTree::query] reports its `l` and `r` as [Bound::Included]. An open start
    /// passed to [AggregationTree::query_range] is reported as `Included(0)` and an open end
    /// as `Excluded(len)`.
    InvalidRange {
        /// Start bound of the requested range
        start: Bound<usize>,
        /// End bound of the requested range
        end: Bound<usize>,
        /// Number of leaves in the tree
        len: usize,
    },
    /// The index does not address a leaf of the tree
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of leaves in the tree
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { start, end, len } => {
                f.write_str("invalid range ")?;
                match start {
                    Bound::Included(s) => write!(f, "[{s}, ")?,
                    Bound::Excluded(s) => write!(f, "({s}, ")?,
                    Bound::Unbounded => f.write_str("(.., ")?,
                }
                match end {
                    Bound::Included(e) => write!(f, "{e}]")?,
                    Bound::Excluded(e) => write!(f, "{e})")?,
                    Bound::Unbounded => f.write_str("..)")?,
                }
                write!(f, " for size {len}")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for size {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns `true` if the error represents [Error::InvalidRange]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
    /// Returns `true` if the error represents [Error::IndexOutOfBounds]
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidRange {
            start: Bound::Included(5),
            end: Bound::Included(3),
            len: 3,
        };
        assert!(err.is_invalid_range());
        assert!(!err.is_index_out_of_bounds());
        assert_eq!(err.to_string(), "invalid range [5, 3] for size 3");

        let err = Error::InvalidRange {
            start: Bound::Excluded(1),
            end: Bound::Excluded(9),
            len: 4,
        };
        assert_eq!(err.to_string(), "invalid range (1, 9) for size 4");

        let err = Error::IndexOutOfBounds { index: 7, len: 5 };
        assert!(err.is_index_out_of_bounds());
        assert_eq!(err.to_string(), "index 7 out of bounds for size 5");
    }
}

//! Error types for integral set operations.

use std::error::Error;
use std::fmt;

/// Errors returned by [`IntegralSet`](crate::IntegralSet) queries that can
/// fail on valid input.
///
/// Both variants are recoverable: the set is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetError {
    /// `take_head()` was called on an empty set.
    Empty,
    /// `nth(index)` was called with `index >= size()`.
    IndexOutOfRange {
        /// The requested rank.
        index: u128,
        /// Number of elements in the set.
        size: u128,
    },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "integral set has no elements"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for set of size {size}")
            }
        }
    }
}

impl Error for SetError {}

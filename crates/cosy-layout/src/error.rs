//! Record layout error types.

use std::error::Error;
use std::fmt;

/// Errors from [`RecordType`](crate::RecordType) construction.
///
/// All of these are invalid-argument errors: the attribute list is
/// rejected as a whole and nothing is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// An attribute has an empty name.
    UnnamedAttribute {
        /// Position of the attribute in the declaration list.
        position: usize,
    },
    /// Two attributes share a name.
    DuplicateAttribute {
        /// The repeated name.
        name: String,
    },
    /// An attribute type reports an alignment of zero.
    ZeroAlignment {
        /// The attribute whose type is malformed.
        name: String,
    },
    /// The padded record size does not fit in `usize`.
    SizeOverflow,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnnamedAttribute { position } => {
                write!(f, "attribute at position {position} must be named")
            }
            Self::DuplicateAttribute { name } => {
                write!(f, "multiple attributes named '{name}'")
            }
            Self::ZeroAlignment { name } => {
                write!(f, "attribute '{name}' has zero alignment")
            }
            Self::SizeOverflow => write!(f, "record size overflows usize"),
        }
    }
}

impl Error for LayoutError {}

//! Attribute types: the size/alignment capability records are built from.
//!
//! [`AttributeType`] is an open trait so that downstream crates can add
//! their own kinds. Two kinds ship here:
//!
//! - [`ScalarType`]: the primitive numeric types, with native size and
//!   alignment.
//! - [`OpaqueType`]: a named blob with caller-chosen size and alignment.

use std::fmt;
use std::mem::{align_of, size_of};

/// The layout capability of an attribute's type.
///
/// Implementations must report an alignment of at least 1;
/// [`RecordType::new`] rejects types that do not. Sizes should be a
/// multiple of the alignment, otherwise attributes laid out after this one
/// may end up unaligned.
///
/// [`RecordType::new`]: crate::RecordType::new
pub trait AttributeType: fmt::Debug {
    /// Human-readable type name (for diagnostics).
    fn name(&self) -> &str;

    /// Size of one value in bytes.
    fn size(&self) -> usize;

    /// Required alignment of one value in bytes.
    fn alignment(&self) -> usize;
}

/// Primitive scalar attribute types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `bool`.
    Bool,
    /// `u8`.
    U8,
    /// `i8`.
    I8,
    /// `u16`.
    U16,
    /// `i16`.
    I16,
    /// `u32`.
    U32,
    /// `i32`.
    I32,
    /// `u64`.
    U64,
    /// `i64`.
    I64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
}

impl AttributeType for ScalarType {
    fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Bool => size_of::<bool>(),
            Self::U8 | Self::I8 => size_of::<u8>(),
            Self::U16 | Self::I16 => size_of::<u16>(),
            Self::U32 | Self::I32 => size_of::<u32>(),
            Self::U64 | Self::I64 => size_of::<u64>(),
            Self::F32 => size_of::<f32>(),
            Self::F64 => size_of::<f64>(),
        }
    }

    fn alignment(&self) -> usize {
        match self {
            Self::Bool => align_of::<bool>(),
            Self::U8 | Self::I8 => align_of::<u8>(),
            Self::U16 | Self::I16 => align_of::<u16>(),
            Self::U32 | Self::I32 => align_of::<u32>(),
            Self::U64 | Self::I64 => align_of::<u64>(),
            Self::F32 => align_of::<f32>(),
            Self::F64 => align_of::<f64>(),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user-defined fixed-size blob.
///
/// Useful for embedding a `#[repr(C)]` struct as a single attribute:
/// `OpaqueType::of::<Velocity>("velocity")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpaqueType {
    name: String,
    size: usize,
    alignment: usize,
}

impl OpaqueType {
    /// A blob of `size` bytes aligned to `alignment`.
    pub fn new(name: impl Into<String>, size: usize, alignment: usize) -> Self {
        Self {
            name: name.into(),
            size,
            alignment,
        }
    }

    /// A blob with the size and alignment of `T`.
    pub fn of<T>(name: impl Into<String>) -> Self {
        Self::new(name, size_of::<T>(), align_of::<T>())
    }
}

impl AttributeType for OpaqueType {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.size
    }

    fn alignment(&self) -> usize {
        self.alignment
    }
}

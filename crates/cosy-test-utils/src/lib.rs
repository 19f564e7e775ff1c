//! Test utilities and mock types for cosy development.
//!
//! Provides mock implementations of the layout traits
//! ([`AttributeType`], [`RecordLayout`]) and reusable record and set
//! fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cosy_layout::{AttributeType, RecordLayout};

/// Mock implementation of [`AttributeType`].
///
/// Reports whatever size and alignment it was built with, including
/// malformed ones, so tests can drive layout validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockAttributeType {
    pub name: String,
    pub size: usize,
    pub alignment: usize,
}

impl MockAttributeType {
    pub fn new(name: impl Into<String>, size: usize, alignment: usize) -> Self {
        Self {
            name: name.into(),
            size,
            alignment,
        }
    }

    /// `size` bytes, byte-aligned. Named `"{size}x1"`.
    pub fn packed(size: usize) -> Self {
        Self::new(format!("{size}x1"), size, 1)
    }

    /// `size` bytes, naturally aligned to `size`. Named `"{size}x{size}"`.
    pub fn aligned(size: usize) -> Self {
        Self::new(format!("{size}x{size}"), size, size)
    }
}

impl AttributeType for MockAttributeType {
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

/// Mock implementation of [`RecordLayout`] with a fixed size.
///
/// Lets table tests pick record sizes directly instead of building a
/// record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedLayout {
    pub size: usize,
    pub alignment: usize,
}

impl FixedLayout {
    pub fn new(size: usize, alignment: usize) -> Self {
        Self { size, alignment }
    }
}

impl RecordLayout for FixedLayout {
    fn size(&self) -> usize {
        self.size
    }

    fn alignment(&self) -> usize {
        self.alignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_names_describe_shape() {
        assert_eq!(MockAttributeType::packed(4).name(), "4x1");
        assert_eq!(MockAttributeType::aligned(8).alignment(), 8);
    }

    #[test]
    fn fixed_layout_reports_its_size() {
        let layout = FixedLayout::new(12, 4);
        assert_eq!(RecordLayout::size(&layout), 12);
        assert_eq!(RecordLayout::alignment(&layout), 4);
    }
}

//! Record types: deterministic memory layouts for lists of attributes.
//!
//! A [`RecordType`] takes a list of named attributes and lays them out
//! for dense storage:
//!
//! 1. attributes are sorted by alignment (widest first), then size
//!    (largest first), then declaration order;
//! 2. each attribute's offset is the running total of the sizes before it;
//! 3. the record size is padded to a multiple of the widest alignment, so
//!    records can be packed back to back in a buffer.
//!
//! When every attribute size is a multiple of its alignment (true for all
//! scalar types), alignment never increasing along the sorted order means
//! step 2 needs no inner padding. Types that break this rule are still laid
//! out by running total, so later attributes may land unaligned.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::attribute::Attribute;
use crate::error::LayoutError;

/// Anything that can report the byte size and alignment of one record.
///
/// This is the capability an actor table needs from its entity type.
pub trait RecordLayout {
    /// Padded size of one record in bytes.
    fn size(&self) -> usize;

    /// Alignment of one record in bytes (at least 1).
    fn alignment(&self) -> usize;
}

/// A laid-out list of attributes.
///
/// Attributes are kept in memory order and can be looked up by name.
#[derive(Clone, Debug)]
pub struct RecordType<'a> {
    attributes: IndexMap<&'a str, Attribute<'a>>,
    size: usize,
    alignment: usize,
}

impl<'a> RecordType<'a> {
    /// Lay out `attributes`.
    ///
    /// Fails if any attribute is unnamed, a name repeats, an attribute type
    /// has zero alignment, or the record size overflows `usize`.
    pub fn new(attributes: impl IntoIterator<Item = Attribute<'a>>) -> Result<Self, LayoutError> {
        let mut sorted: Vec<Attribute<'a>> = Vec::new();
        let mut names = HashSet::new();
        for (position, attr) in attributes.into_iter().enumerate() {
            if attr.name().is_empty() {
                return Err(LayoutError::UnnamedAttribute { position });
            }
            if !names.insert(attr.name()) {
                return Err(LayoutError::DuplicateAttribute {
                    name: attr.name().to_string(),
                });
            }
            let (size, alignment) = (attr.size(), attr.alignment());
            if alignment == 0 {
                return Err(LayoutError::ZeroAlignment {
                    name: attr.name().to_string(),
                });
            }
            if size % alignment != 0 {
                tracing::warn!(
                    target: "cosy.layout",
                    attribute = attr.name(),
                    size,
                    alignment,
                    "attribute size is not a multiple of its alignment"
                );
            }
            sorted.push(attr);
        }

        // Stable: declaration order breaks ties.
        sorted.sort_by(Attribute::memory_order);

        let alignment = sorted.first().map_or(1, Attribute::alignment);
        let mut size = 0usize;
        let mut laid_out = IndexMap::with_capacity(sorted.len());
        for mut attr in sorted {
            attr.set_offset(size);
            size = size
                .checked_add(attr.size())
                .ok_or(LayoutError::SizeOverflow)?;
            laid_out.insert(attr.name(), attr);
        }
        let size = size
            .checked_next_multiple_of(alignment)
            .ok_or(LayoutError::SizeOverflow)?;

        tracing::trace!(
            target: "cosy.layout",
            attributes = laid_out.len(),
            size,
            alignment,
            "record laid out"
        );

        Ok(Self {
            attributes: laid_out,
            size,
            alignment,
        })
    }

    /// Padded size of one record in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alignment of the widest attribute (1 for an empty record).
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes in memory order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute<'a>> + '_ {
        self.attributes.values()
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.get(name)
    }

    /// Byte offset of the named attribute.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.attribute(name).map(Attribute::offset)
    }
}

impl RecordLayout for RecordType<'_> {
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
    use crate::attribute_type::{OpaqueType, ScalarType};

    #[test]
    fn rejects_unnamed_attribute() {
        let t = ScalarType::U8;
        let err = RecordType::new([
            Attribute::new("attr 1", &t),
            Attribute::new("", &t),
            Attribute::new("attr 3", &t),
        ])
        .unwrap_err();
        assert_eq!(err, LayoutError::UnnamedAttribute { position: 1 });
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let t = ScalarType::U8;
        let err = RecordType::new([
            Attribute::new("attr 1", &t),
            Attribute::new("attr 2", &t),
            Attribute::new("attr 1", &t),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::DuplicateAttribute {
                name: "attr 1".into()
            }
        );
    }

    #[test]
    fn rejects_zero_alignment() {
        let zero = OpaqueType::new("zero", 4, 0);
        assert!(matches!(
            RecordType::new([Attribute::new("z", &zero)]),
            Err(LayoutError::ZeroAlignment { .. })
        ));
    }

    #[test]
    fn odd_sized_types_use_running_offsets() {
        let odd = OpaqueType::new("3x2", 3, 2);
        let byte = OpaqueType::new("1x1", 1, 1);
        let rec =
            RecordType::new([Attribute::new("a", &odd), Attribute::new("b", &byte)]).unwrap();
        assert_eq!(rec.offset_of("a"), Some(0));
        assert_eq!(rec.offset_of("b"), Some(3));
        assert_eq!(rec.size(), 4);
        assert_eq!(rec.alignment(), 2);

        let rec = RecordType::new([Attribute::new("a", &odd)]).unwrap();
        assert_eq!(rec.size(), 4);
    }

    #[test]
    fn unaligned_attributes_pack_tightly() {
        let a1 = OpaqueType::new("1x1", 1, 1);
        let a2 = OpaqueType::new("2x1", 2, 1);
        let a4 = OpaqueType::new("4x1", 4, 1);
        let rec = RecordType::new([
            Attribute::new("attr 1", &a1),
            Attribute::new("attr 2", &a1),
            Attribute::new("attr 3", &a1),
            Attribute::new("attr 4", &a2),
            Attribute::new("attr 5", &a2),
            Attribute::new("attr 6", &a4),
        ])
        .unwrap();
        assert_eq!(rec.size(), 11);
        assert_eq!(rec.alignment(), 1);

        let order: Vec<&str> = rec.attributes().map(|a| a.name()).collect();
        assert_eq!(order, ["attr 6", "attr 4", "attr 5", "attr 1", "attr 2", "attr 3"]);
        assert_eq!(rec.offset_of("attr 6"), Some(0));
        assert_eq!(rec.offset_of("attr 5"), Some(6));
        assert_eq!(rec.offset_of("attr 3"), Some(10));
    }

    #[test]
    fn size_is_padded_to_widest_alignment() {
        let a1 = OpaqueType::new("1x1", 1, 1);
        let a2 = OpaqueType::new("2x1", 2, 1);
        let a44 = OpaqueType::new("4x4", 4, 4);
        let rec = RecordType::new([
            Attribute::new("attr 1", &a44),
            Attribute::new("attr 2", &a2),
            Attribute::new("attr 3", &a2),
            Attribute::new("attr 4", &a1),
        ])
        .unwrap();
        assert_eq!(rec.size(), 12);
        assert_eq!(rec.alignment(), 4);
    }

    #[test]
    fn scalars_are_naturally_aligned() {
        let rec = RecordType::new([
            Attribute::new("alive", &ScalarType::Bool),
            Attribute::new("x", &ScalarType::F32),
            Attribute::new("energy", &ScalarType::F64),
            Attribute::new("kind", &ScalarType::U16),
        ])
        .unwrap();
        assert_eq!(rec.offset_of("energy"), Some(0));
        assert_eq!(rec.offset_of("x"), Some(8));
        assert_eq!(rec.offset_of("kind"), Some(12));
        assert_eq!(rec.offset_of("alive"), Some(14));
        assert_eq!(rec.size(), 16);
        for attr in rec.attributes() {
            assert_eq!(attr.offset() % attr.alignment(), 0, "{} misaligned", attr.name());
        }
    }

    #[test]
    fn empty_record_has_zero_size() {
        let rec = RecordType::new([]).unwrap();
        assert_eq!(rec.size(), 0);
        assert_eq!(rec.alignment(), 1);
        assert!(rec.is_empty());
    }

    #[test]
    fn lookup_by_name() {
        let rec = RecordType::new([Attribute::new("hp", &ScalarType::I32)]).unwrap();
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.attribute("hp").map(|a| a.size()), Some(4));
        assert!(rec.attribute("mp").is_none());
        assert_eq!(rec.offset_of("mp"), None);
    }
}

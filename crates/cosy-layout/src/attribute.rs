//! Named, typed attributes of a record.

use std::cmp::Ordering;

use crate::attribute_type::AttributeType;

/// One named field of a [`RecordType`](crate::RecordType).
///
/// The offset is assigned by `RecordType::new`; attributes built by the
/// caller start at offset 0 and are repositioned during layout.
#[derive(Clone, Copy, Debug)]
pub struct Attribute<'a> {
    name: &'a str,
    ty: &'a dyn AttributeType,
    offset: usize,
}

impl<'a> Attribute<'a> {
    /// Declare an attribute named `name` of type `ty`.
    pub fn new(name: &'a str, ty: &'a dyn AttributeType) -> Self {
        Self {
            name,
            ty,
            offset: 0,
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The attribute type.
    pub fn ty(&self) -> &'a dyn AttributeType {
        self.ty
    }

    /// Byte offset within the record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Size in bytes (shorthand for `ty().size()`).
    pub fn size(&self) -> usize {
        self.ty.size()
    }

    /// Alignment in bytes (shorthand for `ty().alignment()`).
    pub fn alignment(&self) -> usize {
        self.ty.alignment()
    }

    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Memory order: widest alignment first, then largest size.
    ///
    /// Equal keys compare equal; callers use a stable sort so that
    /// declaration order breaks ties.
    pub fn memory_order(a: &Attribute<'_>, b: &Attribute<'_>) -> Ordering {
        b.alignment()
            .cmp(&a.alignment())
            .then_with(|| b.size().cmp(&a.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute_type::{OpaqueType, ScalarType};

    #[test]
    fn memory_order_prefers_alignment_then_size() {
        let wide = OpaqueType::new("wide", 8, 4);
        let a = Attribute::new("a", &ScalarType::U64);
        let b = Attribute::new("b", &wide);
        let c = Attribute::new("c", &ScalarType::U32);
        let d = Attribute::new("d", &ScalarType::U8);

        assert_eq!(Attribute::memory_order(&a, &b), Ordering::Less);
        assert_eq!(Attribute::memory_order(&b, &c), Ordering::Less);
        assert_eq!(Attribute::memory_order(&c, &b), Ordering::Greater);
        assert_eq!(Attribute::memory_order(&d, &c), Ordering::Greater);
    }

    #[test]
    fn memory_order_ties_compare_equal() {
        let a = Attribute::new("a", &ScalarType::F32);
        let b = Attribute::new("b", &ScalarType::I32);
        assert_eq!(Attribute::memory_order(&a, &b), Ordering::Equal);
        assert_eq!(Attribute::memory_order(&b, &a), Ordering::Equal);
    }

    #[test]
    fn new_attribute_starts_at_zero() {
        let a = Attribute::new("x", &ScalarType::I16);
        assert_eq!(a.offset(), 0);
        assert_eq!(a.size(), 2);
        assert_eq!(a.ty().name(), "i16");
    }
}

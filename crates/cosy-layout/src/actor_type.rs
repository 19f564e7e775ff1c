//! Named record types identifying one kind of actor.

use std::ops::Deref;

use crate::record::{RecordLayout, RecordType};

/// A [`RecordType`] with a name, describing one kind of actor.
///
/// Dereferences to its record type for attribute lookups.
#[derive(Clone, Debug)]
pub struct ActorType<'a> {
    name: String,
    record: RecordType<'a>,
}

impl<'a> ActorType<'a> {
    /// Name an already laid-out record type.
    pub fn new(name: impl Into<String>, record: RecordType<'a>) -> Self {
        Self {
            name: name.into(),
            record,
        }
    }

    /// The actor kind's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying record layout.
    pub fn record(&self) -> &RecordType<'a> {
        &self.record
    }
}

impl<'a> Deref for ActorType<'a> {
    type Target = RecordType<'a>;

    fn deref(&self) -> &RecordType<'a> {
        &self.record
    }
}

impl RecordLayout for ActorType<'_> {
    fn size(&self) -> usize {
        self.record.size()
    }

    fn alignment(&self) -> usize {
        self.record.alignment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::attribute_type::ScalarType;

    #[test]
    fn actor_type_exposes_record_layout() {
        let record = RecordType::new([
            Attribute::new("x", &ScalarType::F32),
            Attribute::new("y", &ScalarType::F32),
        ])
        .unwrap();
        let boid = ActorType::new("boid", record);
        assert_eq!(boid.name(), "boid");
        assert_eq!(boid.size(), 8);
        assert_eq!(boid.offset_of("y"), Some(4));

        let layout: &dyn RecordLayout = &boid;
        assert_eq!(layout.size(), 8);
        assert_eq!(layout.alignment(), 4);
    }
}

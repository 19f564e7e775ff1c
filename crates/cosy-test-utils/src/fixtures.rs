//! Reusable record and identifier-set fixtures.
//!
//! - [`boid`]: a small flocking agent record built from scalar types.
//! - [`packed_record`]: six byte-aligned attributes, 11 bytes total.
//! - [`padded_record`]: a 4-aligned record whose fields sum to 9 bytes,
//!   padded to 12.
//! - [`fragmented_ids`]: an id set with many short runs.

use cosy_core::{ActorId, ActorSet, IntegralSet};
use cosy_layout::{ActorType, Attribute, LayoutError, RecordType, ScalarType};

/// A flocking agent: position, velocity, and a few flags.
///
/// Size 24, alignment 4.
pub fn boid() -> Result<ActorType<'static>, LayoutError> {
    let record = RecordType::new([
        Attribute::new("x", &ScalarType::F32),
        Attribute::new("y", &ScalarType::F32),
        Attribute::new("vx", &ScalarType::F32),
        Attribute::new("vy", &ScalarType::F32),
        Attribute::new("flock", &ScalarType::U32),
        Attribute::new("alive", &ScalarType::Bool),
        Attribute::new("kind", &ScalarType::U8),
    ])?;
    Ok(ActorType::new("boid", record))
}

/// Attribute types used by [`packed_record`] and [`padded_record`].
///
/// Records borrow their attribute types, so fixtures hand the types back
/// to the caller to own.
pub struct ShapeTypes {
    pub p1: crate::MockAttributeType,
    pub p2: crate::MockAttributeType,
    pub p4: crate::MockAttributeType,
    pub a4: crate::MockAttributeType,
}

impl ShapeTypes {
    pub fn new() -> Self {
        Self {
            p1: crate::MockAttributeType::packed(1),
            p2: crate::MockAttributeType::packed(2),
            p4: crate::MockAttributeType::packed(4),
            a4: crate::MockAttributeType::aligned(4),
        }
    }
}

impl Default for ShapeTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// Three 1-byte, two 2-byte, and one 4-byte attribute, all byte-aligned.
pub fn packed_record(types: &ShapeTypes) -> Result<RecordType<'_>, LayoutError> {
    RecordType::new([
        Attribute::new("attr 1", &types.p1),
        Attribute::new("attr 2", &types.p1),
        Attribute::new("attr 3", &types.p1),
        Attribute::new("attr 4", &types.p2),
        Attribute::new("attr 5", &types.p2),
        Attribute::new("attr 6", &types.p4),
    ])
}

/// One 4-aligned 4-byte attribute plus 5 packed bytes.
pub fn padded_record(types: &ShapeTypes) -> Result<RecordType<'_>, LayoutError> {
    RecordType::new([
        Attribute::new("attr 1", &types.a4),
        Attribute::new("attr 2", &types.p2),
        Attribute::new("attr 3", &types.p2),
        Attribute::new("attr 4", &types.p1),
    ])
}

/// Every other id in `[first, first + 2 * runs)`, as `runs` singleton segments.
pub fn fragmented_ids(first: ActorId, runs: u64) -> ActorSet {
    (0..runs).map(|i| first + 2 * i).collect::<IntegralSet<ActorId>>()
}

//! Actor identifiers and identifier sets.

use crate::set::IntegralSet;

/// Identifies one actor within a table.
///
/// Identifier 0 is reserved and never issued, so it can stand in for
/// "no actor" in user data.
pub type ActorId = u64;

/// A set of actor identifiers, stored range-compressed.
///
/// Batch allocation hands out the smallest free identifiers, so a freshly
/// allocated batch is usually a handful of segments.
pub type ActorSet = IntegralSet<ActorId>;

/// The reserved identifier that is never issued.
pub const NULL_ACTOR: ActorId = 0;

/// The smallest identifier a table issues by default.
pub const FIRST_ACTOR: ActorId = 1;

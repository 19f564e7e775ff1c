//! cosy: actor identifier pools and record layouts.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cosy sub-crates. For most users, adding `cosy` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cosy::prelude::*;
//!
//! // Describe the per-actor record.
//! let boid = ActorType::new(
//!     "boid",
//!     RecordType::new([
//!         Attribute::new("x", &ScalarType::F32),
//!         Attribute::new("y", &ScalarType::F32),
//!         Attribute::new("alive", &ScalarType::Bool),
//!     ])
//!     .unwrap(),
//! );
//! assert_eq!(boid.size(), 12);
//!
//! // Allocate actors and write their records.
//! let mut table = Table::new(&boid);
//! let flock = table.new_actors(3).unwrap();
//! assert_eq!(flock, ActorSet::range(1, 3));
//!
//! let x = boid.offset_of("x").unwrap();
//! table.slot_mut(2).unwrap()[x..x + 4].copy_from_slice(&1.5f32.to_le_bytes());
//!
//! // Deleted ids are reissued smallest-first.
//! table.delete_actor(2);
//! assert_eq!(table.new_actor().unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`set`] | `cosy-core` | `IntegralSet`, `Segment`, actor ids |
//! | [`layout`] | `cosy-layout` | Attribute types, record layouts, actor types |
//! | [`table`] | `cosy-table` | Actor tables and their configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Range-compressed integer sets and actor ids (`cosy-core`).
///
/// [`set::IntegralSet`] works over any primitive integer type;
/// [`set::ActorSet`] is the `u64` instance used for identifier pools.
pub use cosy_core as set;

/// Attribute and record layouts (`cosy-layout`).
///
/// Implement [`layout::AttributeType`] to add attribute kinds beyond
/// [`layout::ScalarType`] and [`layout::OpaqueType`].
pub use cosy_layout as layout;

/// Actor tables (`cosy-table`).
pub use cosy_table as table;

/// Common imports for typical cosy usage.
///
/// ```rust
/// use cosy::prelude::*;
/// ```
pub mod prelude {
    // Sets and ids
    pub use cosy_core::{ActorId, ActorSet, IntegralSet, Segment};

    // Layouts
    pub use cosy_layout::{
        ActorType, Attribute, AttributeType, OpaqueType, RecordLayout, RecordType, ScalarType,
    };

    // Tables
    pub use cosy_table::{Table, TableConfig};

    // Errors
    pub use cosy_core::SetError;
    pub use cosy_layout::LayoutError;
    pub use cosy_table::TableError;
}

//! Record layouts for cosy actor types.
//!
//! Describes the per-actor storage of an actor kind as a list of named,
//! typed attributes, and computes a padded, offset-assigned layout for it.
//!
//! ```text
//! ActorType ("boid")
//! └── RecordType          size, alignment
//!     └── Attribute[]     name, &dyn AttributeType, offset (memory order)
//! ```
//!
//! Tables only need the [`RecordLayout`] capability (`size()` and
//! `alignment()`), which both [`RecordType`] and [`ActorType`] provide.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor_type;
pub mod attribute;
pub mod attribute_type;
pub mod error;
pub mod record;

pub use actor_type::ActorType;
pub use attribute::Attribute;
pub use attribute_type::{AttributeType, OpaqueType, ScalarType};
pub use error::LayoutError;
pub use record::{RecordLayout, RecordType};

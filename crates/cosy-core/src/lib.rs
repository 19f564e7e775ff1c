//! Core bookkeeping types for the cosy actor runtime.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`IntegralSet`], a canonical range-compressed set of integers, along
//! with the [`Integral`] element trait, [`Segment`] intervals, and the
//! actor identifier aliases built on them.
//!
//! # Canonical form
//!
//! ```text
//! IntegralSet<T>
//! └── Vec<Segment<T>>   sorted by lo, non-overlapping, non-adjacent
//! ```
//!
//! Every constructor normalizes its input and every mutation restores the
//! invariant, so two sets are equal exactly when their segment vectors are.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod integral;
pub mod segment;
pub mod set;

pub use error::SetError;
pub use id::{ActorId, ActorSet, FIRST_ACTOR, NULL_ACTOR};
pub use integral::Integral;
pub use segment::Segment;
pub use set::{is_canonical, IntegralSet, Iter};

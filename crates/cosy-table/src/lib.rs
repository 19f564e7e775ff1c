//! Actor tables for cosy.
//!
//! A [`Table`] hands out unique actor identifiers for one actor type and
//! stores one fixed-size record per live actor:
//!
//! ```text
//! Table
//! ├── &dyn RecordLayout   (record size, from an ActorType)
//! ├── ActorSet            (free ids, initially [first_id, u64::MAX])
//! └── Vec<u8>             (capacity × record size, power-of-two growth)
//! ```
//!
//! Identifiers are issued smallest-first and reused after deletion.
//! Deleting an identifier that is not live is a caller bug, checked only
//! in debug builds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod table;

pub use config::TableConfig;
pub use error::{ConfigError, TableError};
pub use table::Table;

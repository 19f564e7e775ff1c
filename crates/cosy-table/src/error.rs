//! Table-specific error types.

use std::error::Error;
use std::fmt;

use cosy_core::ActorId;

/// Errors that can occur while allocating actors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The identifier pool cannot satisfy the request.
    Exhausted {
        /// Number of identifiers requested.
        requested: u64,
        /// Number of identifiers still free.
        available: u128,
    },
    /// The record buffer for the requested capacity does not fit in memory.
    CapacityOverflow {
        /// Capacity in slots that was required.
        slots: u64,
        /// Size of one record in bytes.
        record_size: usize,
    },
    /// The table was built from an invalid [`TableConfig`](crate::TableConfig).
    InvalidConfig(ConfigError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "actor ids exhausted: requested {requested}, available {available}"
                )
            }
            Self::CapacityOverflow { slots, record_size } => {
                write!(
                    f,
                    "buffer capacity overflow: {slots} slots of {record_size} bytes"
                )
            }
            Self::InvalidConfig(e) => write!(f, "invalid table config: {e}"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for TableError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

/// Errors from [`TableConfig::validate`](crate::TableConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `first_id` is the reserved null identifier.
    ReservedFirstId {
        /// The rejected value.
        first_id: ActorId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedFirstId { first_id } => {
                write!(f, "first_id {first_id} is reserved and cannot be issued")
            }
        }
    }
}

impl Error for ConfigError {}

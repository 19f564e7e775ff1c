//! Table configuration parameters.

use cosy_core::{ActorId, FIRST_ACTOR, NULL_ACTOR};

use crate::error::ConfigError;

/// Configuration for an actor [`Table`](crate::Table).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Smallest identifier the table issues.
    ///
    /// Default: 1. Identifiers below this are never handed out, which lets
    /// callers reserve a few well-known ids. Must not be 0.
    pub first_id: ActorId,

    /// Record slots allocated up front, rounded up to a power of two.
    ///
    /// Default: 0 (the buffer is allocated on the first `new_actor()`).
    pub initial_capacity: u64,
}

impl TableConfig {
    /// Default first identifier.
    pub const DEFAULT_FIRST_ID: ActorId = FIRST_ACTOR;

    /// Default number of pre-allocated slots.
    pub const DEFAULT_INITIAL_CAPACITY: u64 = 0;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            first_id: Self::DEFAULT_FIRST_ID,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Set the pre-allocated slot count.
    pub fn with_initial_capacity(mut self, slots: u64) -> Self {
        self.initial_capacity = slots;
        self
    }

    /// Set the first issued identifier.
    pub fn with_first_id(mut self, first_id: ActorId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Check the config for values a table cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_id == NULL_ACTOR {
            return Err(ConfigError::ReservedFirstId {
                first_id: self.first_id,
            });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.first_id, 1);
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn null_first_id_rejected() {
        let config = TableConfig::new().with_first_id(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ReservedFirstId { first_id: 0 })
        );
    }

    #[test]
    fn builders_set_fields() {
        let config = TableConfig::new().with_first_id(16).with_initial_capacity(100);
        assert_eq!(config.first_id, 16);
        assert_eq!(config.initial_capacity, 100);
    }
}

//! Decision storage configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::memory::DEFAULT_MAX_DECISIONS;

/// Limits for the in-process decision store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Decisions kept before the oldest is evicted
    pub max_decisions: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_decisions: DEFAULT_MAX_DECISIONS,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_decisions == 0 {
            return Err(ValidationError::InvalidMaxDecisions);
        }
        Ok(())
    }
}

//! Decision repository port.
//!
//! Defines the contract for persisting and retrieving ranking decisions.

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::ranking::DecisionRecord;
use async_trait::async_trait;

/// Repository port for stored ranking decisions.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a decision, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, record: &DecisionRecord) -> Result<(), DomainError>;

    /// Find a decision by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn decision_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DecisionRepository) {}
    }
}

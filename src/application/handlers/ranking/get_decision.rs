//! GetDecisionHandler - Query handler for a stored decision.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::domain::ranking::DecisionRecord;
use crate::ports::DecisionRepository;

/// Query to fetch a decision by id.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
}

pub type GetDecisionResult = DecisionRecord;

/// Handler for retrieving stored decisions.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<GetDecisionResult, DomainError> {
        self.repository
            .find_by_id(&query.decision_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DecisionNotFound,
                    format!("Decision {} not found", query.decision_id),
                )
            })
    }
}

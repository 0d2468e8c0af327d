//! Stored ranking decisions.

use serde::{Deserialize, Serialize};

use super::{DecisionResult, SensitivityReport};
use crate::domain::foundation::{DecisionId, Timestamp};

/// A ranking outcome as persisted and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: DecisionId,
    pub result: DecisionResult,
    pub sensitivity: Option<SensitivityReport>,
    pub summary: String,
    pub created_at: Timestamp,
}

impl DecisionRecord {
    /// Wraps a fresh result under a new id.
    pub fn new(result: DecisionResult, sensitivity: Option<SensitivityReport>) -> Self {
        Self {
            id: DecisionId::new(),
            summary: result.summary(),
            result,
            sensitivity,
            created_at: Timestamp::now(),
        }
    }
}

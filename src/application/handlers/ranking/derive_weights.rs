//! DeriveWeightsHandler - Query handler for criterion weights alone.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::{CriteriaWeights, Criterion, Judgment, WeightDeriver};

/// Query to derive weights from pairwise judgments.
#[derive(Debug, Clone)]
pub struct DeriveWeightsQuery {
    pub criteria: Vec<Criterion>,
    pub judgments: Vec<Judgment>,
}

/// Derived weights and whether the judgments passed the consistency check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeriveWeightsResult {
    pub weights: CriteriaWeights,
    pub consistent: bool,
}

/// Handler for deriving weights without ranking anything.
pub struct DeriveWeightsHandler {
    consistency_threshold: f64,
}

impl DeriveWeightsHandler {
    pub fn new(consistency_threshold: f64) -> Self {
        Self {
            consistency_threshold,
        }
    }

    pub async fn handle(&self, query: DeriveWeightsQuery) -> Result<DeriveWeightsResult, DomainError> {
        let weights = WeightDeriver::derive(&query.criteria, &query.judgments)?;
        let consistent = weights.consistency.is_acceptable(self.consistency_threshold);

        debug!(
            criteria = query.criteria.len(),
            ratio = weights.consistency.ratio,
            consistent,
            "Derived criterion weights"
        );

        Ok(DeriveWeightsResult {
            weights,
            consistent,
        })
    }
}

//! Ranking error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while building or ranking a decision matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("Criterion '{0}' is defined more than once")]
    DuplicateCriterion(String),

    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Criterion '{0}' cannot be compared with itself")]
    SelfComparison(String),

    #[error("Alternative '{alternative_id}' has {actual} values but there are {expected} criteria")]
    DimensionMismatch {
        alternative_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Expected {expected} weights but got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },

    #[error("Weight at position {index} must be finite and non-negative, got {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        let code = match &err {
            RankingError::NoCriteria
            | RankingError::DuplicateCriterion(_)
            | RankingError::InvalidWeight { .. } => ErrorCode::ValidationFailed,
            RankingError::UnknownCriterion(_) => ErrorCode::CriterionNotFound,
            RankingError::SelfComparison(_) => ErrorCode::InvalidJudgment,
            RankingError::DimensionMismatch { .. } | RankingError::WeightCountMismatch { .. } => {
                ErrorCode::DimensionMismatch
            }
            RankingError::Validation(inner) => return inner.clone().into(),
        };
        DomainError::new(code, err.to_string())
    }
}

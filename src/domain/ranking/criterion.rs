//! Criteria and their preference direction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Whether higher or lower values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

impl CriterionType {
    /// Returns true if higher values are preferred.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }

    /// Picks the preferred of two values.
    pub fn best(&self, a: f64, b: f64) -> f64 {
        match self {
            CriterionType::Benefit => a.max(b),
            CriterionType::Cost => a.min(b),
        }
    }

    /// Picks the least preferred of two values.
    pub fn worst(&self, a: f64, b: f64) -> f64 {
        match self {
            CriterionType::Benefit => a.min(b),
            CriterionType::Cost => a.max(b),
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Benefit => write!(f, "benefit"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}

/// A named decision criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a criterion, rejecting an empty name.
    pub fn new(
        name: impl Into<String>,
        criterion_type: CriterionType,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.name"));
        }
        Ok(Self {
            name,
            criterion_type,
        })
    }

    pub fn benefit(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, CriterionType::Benefit)
    }

    pub fn cost(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, CriterionType::Cost)
    }
}

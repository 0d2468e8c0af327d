//! Decision Matrix - alternatives measured against an ordered list of criteria.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Criterion, CriterionType, MetricValue, RankingError};
use crate::domain::foundation::ValidationError;

/// A shipment option (carrier or forwarder) with one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub label: String,
    /// Crisp values, positionally aligned with the matrix criteria.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative from crisp values.
    pub fn new(id: impl Into<String>, label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            values,
        }
    }

    /// Creates an alternative from possibly uncertain measurements.
    ///
    /// Each measurement is resolved to a crisp value; intervals use the given
    /// whitening coefficient.
    pub fn from_metrics(
        id: impl Into<String>,
        label: impl Into<String>,
        metrics: &[MetricValue],
        whitening: f64,
    ) -> Result<Self, ValidationError> {
        let values = metrics
            .iter()
            .map(|m| m.resolve(whitening))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(id, label, values))
    }
}

/// An alternative whose measurements may be intervals or neutrosophic grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedAlternative {
    pub id: String,
    pub label: String,
    pub metrics: Vec<MetricValue>,
}

impl GradedAlternative {
    pub fn new(id: impl Into<String>, label: impl Into<String>, metrics: Vec<MetricValue>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            metrics,
        }
    }

    /// Resolves every measurement to a crisp value.
    pub fn resolve(&self, whitening: f64) -> Result<Alternative, ValidationError> {
        Alternative::from_metrics(self.id.clone(), self.label.clone(), &self.metrics, whitening)
    }

    /// Returns true if any measurement carries uncertainty.
    pub fn is_uncertain(&self) -> bool {
        self.metrics.iter().any(MetricValue::is_uncertain)
    }
}

/// The alternatives-by-criteria matrix fed into the ranking.
///
/// Construction guarantees every row has exactly one finite value per
/// criterion and criterion names are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a validated matrix.
    ///
    /// # Errors
    /// - `NoCriteria` if `criteria` is empty
    /// - `DuplicateCriterion` if two criteria share a name
    /// - `DimensionMismatch` if a row length differs from the criteria count
    /// - `Validation` for empty names or non-finite values
    pub fn new(
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, RankingError> {
        validate_criteria(&criteria)?;

        for alt in &alternatives {
            if alt.id.trim().is_empty() {
                return Err(ValidationError::empty_field("alternative.id").into());
            }
            if alt.values.len() != criteria.len() {
                return Err(RankingError::DimensionMismatch {
                    alternative_id: alt.id.clone(),
                    expected: criteria.len(),
                    actual: alt.values.len(),
                });
            }
            if let Some(pos) = alt.values.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::not_finite(format!(
                    "{}.{}",
                    alt.id, criteria[pos].name
                ))
                .into());
            }
        }

        Ok(Self {
            criteria,
            alternatives,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the benefit/cost direction of each criterion in order.
    pub fn criterion_types(&self) -> Vec<CriterionType> {
        self.criteria.iter().map(|c| c.criterion_type).collect()
    }

    /// Returns the value rows in alternative order.
    pub fn rows(&self) -> Vec<&[f64]> {
        self.alternatives.iter().map(|a| a.values.as_slice()).collect()
    }

    /// Position of the named criterion, if present.
    pub fn criterion_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Checks that criteria are non-empty, named, and unique.
pub(crate) fn validate_criteria(criteria: &[Criterion]) -> Result<(), RankingError> {
    if criteria.is_empty() {
        return Err(RankingError::NoCriteria);
    }
    let mut seen = HashSet::new();
    for criterion in criteria {
        if criterion.name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.name").into());
        }
        if !seen.insert(criterion.name.as_str()) {
            return Err(RankingError::DuplicateCriterion(criterion.name.clone()));
        }
    }
    Ok(())
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Appends a benefit criterion by name.
    pub fn benefit(mut self, name: impl Into<String>) -> Self {
        self.criteria.push(Criterion {
            name: name.into(),
            criterion_type: CriterionType::Benefit,
        });
        self
    }

    /// Appends a cost criterion by name.
    pub fn cost(mut self, name: impl Into<String>) -> Self {
        self.criteria.push(Criterion {
            name: name.into(),
            criterion_type: CriterionType::Cost,
        });
        self
    }

    /// Appends an alternative with crisp values.
    pub fn alternative(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        self.alternatives.push(Alternative::new(id, label, values));
        self
    }

    /// Builds and validates the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, RankingError> {
        DecisionMatrix::new(self.criteria, self.alternatives)
    }
}

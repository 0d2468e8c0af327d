//! Metric values - crisp, interval (grey) or graded (neutrosophic) measurements.

use serde::{Deserialize, Serialize};

use super::{GreyNumber, NeutrosophicTriple};
use crate::domain::foundation::ValidationError;

/// A single measurement of an alternative against one criterion.
///
/// Serialized untagged: a bare number, an object with `lower`/`upper`, or an
/// object with `truth`/`indeterminacy`/`falsity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Crisp(f64),
    Interval(GreyNumber),
    Graded(NeutrosophicTriple),
}

impl MetricValue {
    /// Resolves the measurement to a crisp scalar.
    ///
    /// Intervals are whitened with `whitening`; graded values use their
    /// neutrosophic score.
    pub fn resolve(&self, whitening: f64) -> Result<f64, ValidationError> {
        match self {
            MetricValue::Crisp(v) if !v.is_finite() => Err(ValidationError::not_finite("metric")),
            MetricValue::Crisp(v) => Ok(*v),
            MetricValue::Interval(g) => Ok(g.whiten(whitening)),
            MetricValue::Graded(t) => Ok(t.score()),
        }
    }

    /// Returns true if the value carries uncertainty.
    pub fn is_uncertain(&self) -> bool {
        match self {
            MetricValue::Crisp(_) => false,
            MetricValue::Interval(g) => g.width() > 0.0,
            MetricValue::Graded(t) => t.indeterminacy() > 0.0,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Crisp(value)
    }
}

impl From<GreyNumber> for MetricValue {
    fn from(value: GreyNumber) -> Self {
        MetricValue::Interval(value)
    }
}

impl From<NeutrosophicTriple> for MetricValue {
    fn from(value: NeutrosophicTriple) -> Self {
        MetricValue::Graded(value)
    }
}

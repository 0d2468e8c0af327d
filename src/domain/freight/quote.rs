//! Forwarder quotes for a single shipment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::ranking::{Alternative, GradedAlternative, MetricValue};

/// A forwarder's offer, measured on the standard freight criteria.
///
/// Any field may be uncertain, e.g. a transit window of 10 to 14 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentQuote {
    pub forwarder: String,
    pub label: String,
    pub cost: MetricValue,
    pub transit_days: MetricValue,
    /// On-time delivery rate, in `[0, 1]`.
    pub reliability: MetricValue,
    /// Loss or damage risk, in `[0, 1]`.
    pub risk: MetricValue,
}

impl ShipmentQuote {
    /// Values in `standard_criteria` order.
    pub fn metrics(&self) -> Vec<MetricValue> {
        vec![self.cost, self.transit_days, self.reliability, self.risk]
    }

    pub fn to_graded(&self) -> GradedAlternative {
        GradedAlternative::new(self.forwarder.clone(), self.label.clone(), self.metrics())
    }

    /// Resolves the quote to a crisp alternative.
    pub fn to_alternative(&self, whitening: f64) -> Result<Alternative, ValidationError> {
        self.to_graded().resolve(whitening)
    }
}

impl From<&ShipmentQuote> for GradedAlternative {
    fn from(quote: &ShipmentQuote) -> Self {
        quote.to_graded()
    }
}

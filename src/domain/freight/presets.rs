//! Standard freight criteria and judgments.

use crate::domain::ranking::{Criterion, CriterionType, ImportanceLevel, Judgment};

pub const COST: &str = "cost";
pub const TRANSIT_TIME: &str = "transit_time";
pub const RELIABILITY: &str = "reliability";
pub const RISK: &str = "risk";

/// Criteria in the order `ShipmentQuote` emits its values.
pub fn standard_criteria() -> Vec<Criterion> {
    [
        (COST, CriterionType::Cost),
        (TRANSIT_TIME, CriterionType::Cost),
        (RELIABILITY, CriterionType::Benefit),
        (RISK, CriterionType::Cost),
    ]
    .into_iter()
    .map(|(name, criterion_type)| Criterion {
        name: name.to_string(),
        criterion_type,
    })
    .collect()
}

/// Default priorities: cost first, risk last.
///
/// Transit time and reliability are left unjudged (treated as equal).
pub fn standard_judgments() -> Vec<Judgment> {
    vec![
        Judgment::level(COST, TRANSIT_TIME, ImportanceLevel::Moderate),
        Judgment::level(COST, RELIABILITY, ImportanceLevel::Moderate),
        Judgment::level(COST, RISK, ImportanceLevel::Strong),
        Judgment::level(TRANSIT_TIME, RISK, ImportanceLevel::Moderate),
        Judgment::level(RELIABILITY, RISK, ImportanceLevel::Moderate),
    ]
}

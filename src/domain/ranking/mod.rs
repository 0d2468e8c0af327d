//! Ranking Module - multi-criteria ranking of shipment alternatives.
//!
//! Criterion weights come from pairwise judgments expressed as neutrosophic
//! triples; alternatives are then ordered by TOPSIS closeness to the ideal.
//!
//! # Components
//!
//! - `NeutrosophicTriple` / `GreyNumber` / `MetricValue` - uncertain values
//! - `DecisionMatrix` - alternatives aligned with an ordered criteria list
//! - `WeightDeriver` - reciprocal pairwise matrix, geometric-mean weights, CR
//! - `TopsisRanker` - closeness to the ideal and anti-ideal solutions
//! - `DecisionEngine` - weighting and ranking chained into a `DecisionResult`
//! - `SensitivityAnalyzer` - leader stability under weight perturbation
//! - `DecisionRecord` - a stored result with its id and timestamp
//!
//! Everything here is pure and synchronous; persistence goes through ports.

mod criterion;
mod decision;
mod decision_matrix;
mod errors;
mod grey;
mod judgment;
mod metric;
mod neutrosophic;
mod record;
mod sensitivity;
mod topsis;
mod weighting;

pub use criterion::{Criterion, CriterionType};
pub use decision::{DecisionEngine, DecisionResult, EngineSettings};
pub use decision_matrix::{Alternative, DecisionMatrix, DecisionMatrixBuilder, GradedAlternative};
pub use errors::RankingError;
pub use grey::{GreyNumber, DEFAULT_WHITENING};
pub use judgment::Judgment;
pub use metric::MetricValue;
pub use neutrosophic::{ImportanceLevel, NeutrosophicTriple, MAX_INTENSITY};
pub use record::DecisionRecord;
pub use sensitivity::{
    SensitivityAnalyzer, SensitivityReport, WeightPerturbation, DEFAULT_SENSITIVITY_DELTA,
};
pub use topsis::{RankedAlternative, TopsisEvaluation, TopsisRanker, NEUTRAL_CLOSENESS};
pub use weighting::{
    Consistency, CriteriaWeights, PairwiseMatrix, WeightDeriver, WeightingMethod,
    DEFAULT_CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};

//! Ranking command and query handlers.

mod derive_weights;
mod get_decision;
mod rank_alternatives;
mod rank_quotes;

pub use derive_weights::{DeriveWeightsHandler, DeriveWeightsQuery, DeriveWeightsResult};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery, GetDecisionResult};
pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
pub use rank_quotes::{RankQuotesCommand, RankQuotesHandler};

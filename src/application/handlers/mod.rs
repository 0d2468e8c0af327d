//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    DeriveWeightsHandler, DeriveWeightsQuery, DeriveWeightsResult, GetDecisionHandler,
    GetDecisionQuery, GetDecisionResult, RankAlternativesCommand, RankAlternativesHandler,
    RankAlternativesResult, RankQuotesCommand, RankQuotesHandler,
};

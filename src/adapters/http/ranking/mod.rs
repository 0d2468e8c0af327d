//! Ranking HTTP adapter module.
//!
//! Provides REST API endpoints for weighting and ranking.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::RankingAppState;
pub use routes::ranking_routes;

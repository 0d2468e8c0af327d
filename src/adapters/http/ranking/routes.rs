//! HTTP routes for ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_decision, derive_weights, get_decision, health, rank_quotes, RankingAppState,
};

/// Creates the ranking router with all routes.
pub fn ranking_routes(state: RankingAppState) -> Router {
    Router::new()
        // POST /api/decisions
        .route("/api/decisions", post(create_decision))
        // GET /api/decisions/:decision_id
        .route("/api/decisions/:decision_id", get(get_decision))
        // POST /api/weights
        .route("/api/weights", post(derive_weights))
        // POST /api/quotes/rank
        .route("/api/quotes/rank", post(rank_quotes))
        .route("/health", get(health))
        .with_state(state)
}

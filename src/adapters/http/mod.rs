//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full service with its middleware stack.

pub mod ranking;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use ranking::{ranking_routes, ErrorResponse, RankingAppState};

/// Builds a CORS layer from the configured origins.
///
/// With no origins configured, only same-origin requests are allowed.
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.allowed_origins();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer
    } else {
        tracing::info!(count = origins.len(), "CORS: allowing configured origins");
        layer.allow_origin(origins)
    }
}

/// Create the complete application router.
pub fn app_router(state: RankingAppState, server: &ServerConfig) -> Router {
    ranking_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(server))
}

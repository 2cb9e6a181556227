use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::QueryLimits;
use crate::index::AnagramIndex;
use crate::metrics::LookupMetrics;

use super::handlers::*;
use super::rate_limit::RateLimitLayer;

/// Application state shared across all handlers
pub struct AppState {
    pub index: Arc<AnagramIndex>,
    pub metrics: Arc<LookupMetrics>,
    pub limits: QueryLimits,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState, rate_limit: RateLimitLayer) -> Router {
    let max_body_bytes = state.limits.max_body_bytes;
    let state = Arc::new(state);

    Router::new()
        // Lookup
        .route("/unscramble", get(unscramble_get).post(unscramble_post))
        // Health and metrics
        .route("/ping", get(ping))
        .route("/", get(home))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(rate_limit)
}

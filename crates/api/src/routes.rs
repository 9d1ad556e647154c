use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
///
/// `/` accepts GET only; axum answers every other method with 405.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::get_map).head(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}

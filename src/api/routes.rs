//! API route table.

use axum::routing::{get, post};
use axum::Router;

use super::error::method_not_allowed;
use super::handlers::{self, ApiState};

/// Routes nested under `/api`.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route(
            "/predict-metals",
            post(handlers::predict_metals).fallback(method_not_allowed),
        )
        .route(
            "/samples/csv",
            post(handlers::upload_samples_csv).fallback(method_not_allowed),
        )
        .route("/info", get(handlers::info))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}

/// Root-level health alias for load balancers.
pub fn legacy_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .with_state(state)
}

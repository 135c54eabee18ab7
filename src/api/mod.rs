//! REST API module using Axum
//!
//! Serves the prediction boundary consumed by the map client, the sample
//! CSV upload, static info content, health and counters. All routes live
//! under `/api`, with `/health` kept at the root.

pub mod error;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Headers browsers may send cross-origin.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

/// Permissive CORS: any origin, the client's auth and content headers.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
}

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        .nest("/api", routes::api_routes(state.clone()))
        .merge(routes::legacy_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer())
}

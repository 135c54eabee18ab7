//! Health and Prometheus counters

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use super::ApiState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime_secs: u64,
    /// Number of known monitoring sites.
    pub sites: usize,
    pub match_radius_km: f64,
}

/// GET /api/health (also served at `/health`)
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: state.uptime_secs(),
        sites: state.engine.resolver().registry().len(),
        match_radius_km: state.engine.resolver().radius_km(),
    })
}

/// GET /api/metrics
///
/// Counters in Prometheus text format (version 0.0.4), hand-formatted.
///
/// - `bluvia_predictions_total{source="known_site"|"estimated"}`
/// - `bluvia_requests_rejected_total`: 4xx responses from prediction and upload
/// - `bluvia_uploads_total`: accepted CSV uploads
/// - `bluvia_samples_ingested_total`: parsed sample rows
/// - `bluvia_uptime_seconds`
pub async fn metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let c = &state.counters;
    let mut body = String::with_capacity(1024);

    body.push_str("# HELP bluvia_predictions_total Predictions served, by value source\n");
    body.push_str("# TYPE bluvia_predictions_total counter\n");
    body.push_str(&format!(
        "bluvia_predictions_total{{source=\"known_site\"}} {}\n",
        c.predictions_known_site.load(Ordering::Relaxed)
    ));
    body.push_str(&format!(
        "bluvia_predictions_total{{source=\"estimated\"}} {}\n",
        c.predictions_estimated.load(Ordering::Relaxed)
    ));

    body.push_str("# HELP bluvia_requests_rejected_total Requests rejected as invalid\n");
    body.push_str("# TYPE bluvia_requests_rejected_total counter\n");
    body.push_str(&format!(
        "bluvia_requests_rejected_total {}\n",
        c.requests_rejected.load(Ordering::Relaxed)
    ));

    body.push_str("# HELP bluvia_uploads_total Accepted sample CSV uploads\n");
    body.push_str("# TYPE bluvia_uploads_total counter\n");
    body.push_str(&format!("bluvia_uploads_total {}\n", c.uploads_accepted.load(Ordering::Relaxed)));

    body.push_str("# HELP bluvia_samples_ingested_total Sample rows parsed from uploads\n");
    body.push_str("# TYPE bluvia_samples_ingested_total counter\n");
    body.push_str(&format!(
        "bluvia_samples_ingested_total {}\n",
        c.samples_ingested.load(Ordering::Relaxed)
    ));

    body.push_str("# HELP bluvia_uptime_seconds Process uptime in seconds\n");
    body.push_str("# TYPE bluvia_uptime_seconds gauge\n");
    body.push_str(&format!("bluvia_uptime_seconds {}\n", state.uptime_secs()));

    (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}

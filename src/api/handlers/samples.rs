//! Water-sample CSV upload

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::ApiState;
use crate::api::error::ApiError;
use crate::ingest;
use crate::types::WaterSample;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: String,
    pub rows: usize,
    pub skipped_blank_rows: usize,
    pub samples: Vec<WaterSample>,
}

/// POST /api/samples/csv
///
/// Body is the raw CSV text (UTF-8). Rows are parsed and echoed back;
/// nothing is stored.
pub async fn upload_samples_csv(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    let parsed = std::str::from_utf8(&body)
        .map_err(|e| ApiError::BadRequest(format!("CSV body must be UTF-8 text: {e}")))
        .and_then(|text| ingest::parse_samples(text).map_err(ApiError::from))
        .map_err(|e| {
            state.counters.record_rejection();
            e
        })?;

    let file_id = Uuid::new_v4().to_string();
    info!(file_id = %file_id, rows = parsed.samples.len(), blank = parsed.blank_rows, "Parsed sample CSV upload");
    state.counters.record_upload(parsed.samples.len());

    Ok(Json(UploadResponse {
        success: true,
        file_id,
        rows: parsed.samples.len(),
        skipped_blank_rows: parsed.blank_rows,
        samples: parsed.samples,
    }))
}

//! Metal prediction endpoint

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::ApiState;
use crate::api::error::ApiError;
use crate::prediction::{PredictionEngine, PredictionError};
use crate::types::{Coordinate, PredictionResult};

/// Raw request body. Values stay untyped so a string `lat` is rejected
/// rather than coerced.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default, alias = "lng")]
    pub lon: Option<Value>,
}

impl PredictRequest {
    /// Extract a finite coordinate, or `InvalidInput`.
    pub fn coordinate(&self) -> Result<Coordinate, PredictionError> {
        let lat = number_field(self.lat.as_ref(), "lat")?;
        let lon = number_field(self.lon.as_ref(), "lon")?;
        PredictionEngine::validate(Coordinate::new(lat, lon))
    }
}

fn number_field(value: Option<&Value>, name: &str) -> Result<f64, PredictionError> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| PredictionError::InvalidInput(format!("{name} is out of range"))),
        Some(_) => Err(PredictionError::InvalidInput(format!("{name} must be a number"))),
        None => Err(PredictionError::InvalidInput(format!("{name} is required"))),
    }
}

/// Parse a JSON request body into a coordinate.
pub fn parse_predict_body(body: &[u8]) -> Result<Coordinate, PredictionError> {
    let invalid = || {
        PredictionError::InvalidInput("body must be a JSON object with numeric lat and lon".to_string())
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected prediction body");
        invalid()
    })?;
    // serde would also accept `[lat, lon]` for a struct
    if !value.is_object() {
        return Err(invalid());
    }
    let request: PredictRequest = serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Rejected prediction body");
        invalid()
    })?;
    request.coordinate()
}

/// POST /api/predict-metals
///
/// Body `{ "lat": number, "lon": number }` (`lng` accepted for `lon`).
pub async fn predict_metals(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    let result = parse_predict_body(&body).and_then(|coord| {
        info!(lat = coord.lat, lon = coord.lon, "Predicting metals");
        state.rng.predict(&state.engine, coord)
    });

    match result {
        Ok(prediction) => {
            state.counters.record_prediction(&prediction);
            Ok(Json(prediction))
        }
        Err(e) => {
            if matches!(e, PredictionError::InvalidInput(_)) {
                state.counters.record_rejection();
            }
            Err(e.into())
        }
    }
}

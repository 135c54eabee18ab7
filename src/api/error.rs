//! JSON error responses: `{ "error": "<message>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::ingest::IngestError;
use crate::prediction::PredictionError;

/// Message returned for every 500. Details go to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MethodNotAllowed,
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PredictionError> for ApiError {
    fn from(e: PredictionError) -> Self {
        match e {
            PredictionError::InvalidInput(msg) => Self::BadRequest(format!("Invalid lat/lon parameters: {msg}")),
            PredictionError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(e: IngestError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) => msg,
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::Internal(detail) => {
                error!(detail = %detail, "Internal error while handling request");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };
        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for unsupported methods on a known route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

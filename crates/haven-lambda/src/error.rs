use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use haven_instruments::error::InstrumentError;
use haven_mood::error::MoodError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => {
                tracing::warn!("rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<MoodError> for ApiError {
    fn from(e: MoodError) -> Self {
        // Only reachable with a `today` at the edge of the calendar.
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

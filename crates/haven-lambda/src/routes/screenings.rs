use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use haven_instruments::{ScreeningResult, classify_screening};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct Phq9Request {
    /// Item answers in questionnaire order.
    pub responses: Vec<i32>,
}

pub async fn classify_phq9(
    payload: Result<Json<Phq9Request>, JsonRejection>,
) -> Result<Json<ScreeningResult>, ApiError> {
    let Json(req) = payload?;
    let result = classify_screening(&req.responses)?;
    tracing::info!(
        severity = ?result.severity,
        safety_followup = result.safety_followup,
        "phq9 classified"
    );
    Ok(Json(result))
}

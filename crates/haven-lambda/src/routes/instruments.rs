use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use haven_instruments::scoring::{Domain, ScoreEntry};
use haven_instruments::{ScreeningResult, all_instruments, get_instrument, score_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
    }))
}

pub async fn score(
    Path(id): Path<String>,
    payload: Result<Json<Vec<ScoreEntry>>, JsonRejection>,
) -> Result<Json<ScreeningResult>, ApiError> {
    let Json(scores) = payload?;
    let result = score_instrument(&id, &scores)?;
    tracing::info!(instrument = %id, severity = ?result.severity, "instrument scored");
    Ok(Json(result))
}

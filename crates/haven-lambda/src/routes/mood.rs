use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use haven_core::models::mood::MoodEntry;
use haven_mood::{MoodSummary, aggregate_mood};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MoodSummaryRequest {
    pub entries: Vec<MoodEntry>,
    /// Falls back to the configured windows when absent.
    #[serde(default)]
    pub window_sizes: Option<Vec<usize>>,
    /// Falls back to the current date in the configured time zone.
    #[serde(default)]
    pub today: Option<jiff::civil::Date>,
}

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<MoodSummaryRequest>, JsonRejection>,
) -> Result<Json<MoodSummary>, ApiError> {
    let Json(req) = payload?;
    let config = &state.config;
    let windows = req.window_sizes.as_deref().unwrap_or(config.mood_windows.as_slice());
    let today = req.today.unwrap_or_else(|| config.today());

    let summary = aggregate_mood(&req.entries, windows, today, config.week_start)?;
    tracing::info!(
        entries = summary.entry_count,
        trend = ?summary.trend,
        "mood summary built"
    );
    Ok(Json(summary))
}

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The type of score an item or composite produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled count or sum.
    Raw,
    /// Likert-style frequency rating (e.g., 0–3).
    Rating,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// True when `value` lies within bounds and sits exactly on a step.
    /// Near-misses are rejected, never snapped to the nearest step.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        self.step
            .is_none_or(|step| ((value - self.min) / step).fract() == 0.0)
    }
}

/// A single questionnaire item within a domain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A top-level domain within an instrument, containing its items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A keyed score submitted for one item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

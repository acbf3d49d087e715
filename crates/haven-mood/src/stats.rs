use haven_core::models::mood::{Factor, MoodEntry};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Entries in each half of the trend comparison.
pub const TREND_WINDOW: usize = 3;

/// Minimum change in mean mood, on the 1–10 scale, that counts as movement.
pub const TREND_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improved,
    Declined,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn from_means(recent: f64, previous: f64) -> Self {
        let delta = recent - previous;
        if delta > TREND_THRESHOLD {
            Self::Improved
        } else if delta < -TREND_THRESHOLD {
            Self::Declined
        } else {
            Self::Stable
        }
    }
}

/// Mean of each secondary factor over the entries that recorded it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorAverages {
    pub energy: Option<f64>,
    pub anxiety: Option<f64>,
    pub sleep: Option<f64>,
    pub stress: Option<f64>,
}

/// Copy of `entries` ordered most recent first. Entries sharing a date keep
/// their relative order.
pub fn sort_by_recency(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut ordered = entries.to_vec();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

/// Mean mood over the first `window` entries. `None` when there is nothing
/// to average, so callers never divide by zero.
pub fn average(entries: &[MoodEntry], window: usize) -> Option<f64> {
    let taken = &entries[..window.min(entries.len())];
    mean(taken.iter().map(|e| f64::from(e.mood)))
}

/// Compare the newest `TREND_WINDOW` entries with the `TREND_WINDOW` before
/// them. Expects `entries` most recent first.
pub fn trend(entries: &[MoodEntry]) -> Trend {
    if entries.len() < TREND_WINDOW * 2 {
        return Trend::InsufficientData;
    }
    let (recent, rest) = entries.split_at(TREND_WINDOW);
    let previous = &rest[..TREND_WINDOW];

    match (
        mean(recent.iter().map(|e| f64::from(e.mood))),
        mean(previous.iter().map(|e| f64::from(e.mood))),
    ) {
        (Some(recent), Some(previous)) => Trend::from_means(recent, previous),
        _ => Trend::InsufficientData,
    }
}

pub fn factor_averages(entries: &[MoodEntry]) -> FactorAverages {
    let of = |factor: Factor| {
        mean(
            entries
                .iter()
                .filter_map(|e| e.factors.get(factor))
                .map(f64::from),
        )
    };

    FactorAverages {
        energy: of(Factor::Energy),
        anxiety: of(Factor::Anxiety),
        sleep: of(Factor::Sleep),
        stress: of(Factor::Stress),
    }
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

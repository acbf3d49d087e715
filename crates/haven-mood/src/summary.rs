use haven_core::models::mood::MoodEntry;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::MoodError;
use crate::stats::{self, FactorAverages, Trend};
use crate::week::{self, DayBucket, WeekStart};

/// Windows used when the caller does not ask for specific ones: the last
/// three check-ins and the last seven.
pub const DEFAULT_WINDOWS: [usize; 2] = [3, 7];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowAverage {
    /// Requested window size.
    pub window: usize,
    /// Entries actually averaged; smaller than `window` on short histories.
    pub entries: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodSummary {
    pub entry_count: usize,
    pub averages: Vec<WindowAverage>,
    pub trend: Trend,
    pub weekly_buckets: Vec<DayBucket>,
    pub factor_averages: FactorAverages,
}

/// Aggregate a mood history for display.
///
/// `entries` need not be sorted; a most-recent-first copy is used for the
/// windowed figures. An empty history produces a summary with no averages,
/// `Trend::InsufficientData` and seven empty day buckets.
pub fn aggregate_mood(
    entries: &[MoodEntry],
    window_sizes: &[usize],
    today: Date,
    week_start: WeekStart,
) -> Result<MoodSummary, MoodError> {
    let ordered = stats::sort_by_recency(entries);

    let averages = window_sizes
        .iter()
        .map(|&window| WindowAverage {
            window,
            entries: window.min(ordered.len()),
            average: stats::average(&ordered, window),
        })
        .collect();

    let summary = MoodSummary {
        entry_count: ordered.len(),
        averages,
        trend: stats::trend(&ordered),
        weekly_buckets: week::weekly_buckets(&ordered, today, week_start)?,
        factor_averages: stats::factor_averages(&ordered),
    };

    tracing::debug!(
        entries = summary.entry_count,
        trend = ?summary.trend,
        "mood history aggregated"
    );

    Ok(summary)
}

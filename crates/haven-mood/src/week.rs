use std::str::FromStr;

use haven_core::models::mood::MoodEntry;
use jiff::ToSpan;
use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::MoodError;
use crate::stats::mean;

pub const DAYS_PER_WEEK: i64 = 7;

/// First day of the display week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn days_since_start(self, weekday: Weekday) -> i8 {
        match self {
            Self::Sunday => weekday.to_sunday_zero_offset(),
            Self::Monday => weekday.to_monday_zero_offset(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(format!("unknown week start '{other}', expected sunday or monday")),
        }
    }
}

/// One calendar day of the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayBucket {
    pub date: Date,
    pub weekday: String,
    pub entries: usize,
    pub average_mood: Option<f64>,
}

/// First day of the week containing `today`.
pub fn week_start_date(today: Date, week_start: WeekStart) -> Result<Date, MoodError> {
    let offset = i64::from(week_start.days_since_start(today.weekday()));
    Ok(today.checked_sub(offset.days())?)
}

/// Seven buckets, in week order, for the week containing `today`. Entries
/// dated outside that week are ignored.
pub fn weekly_buckets(
    entries: &[MoodEntry],
    today: Date,
    week_start: WeekStart,
) -> Result<Vec<DayBucket>, MoodError> {
    let first = week_start_date(today, week_start)?;

    (0..DAYS_PER_WEEK)
        .map(|offset| -> Result<DayBucket, MoodError> {
            let date = first.checked_add(offset.days())?;
            let moods: Vec<f64> = entries
                .iter()
                .filter(|e| e.date == date)
                .map(|e| f64::from(e.mood))
                .collect();
            Ok(DayBucket {
                date,
                weekday: weekday_name(date.weekday()).to_string(),
                entries: moods.len(),
                average_mood: mean(moods.into_iter()),
            })
        })
        .collect()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

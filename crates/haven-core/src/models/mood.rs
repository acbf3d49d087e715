use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A rating on the 1–10 scale used for mood and every secondary factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64")]
#[ts(export)]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::InvalidMoodScore(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoodScore> for f64 {
    fn from(score: MoodScore) -> Self {
        score.0 as f64
    }
}

/// Secondary factors a user may record alongside their mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Factor {
    Energy,
    Anxiety,
    Sleep,
    Stress,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<MoodScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anxiety: Option<MoodScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<MoodScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<MoodScore>,
}

impl MoodFactors {
    pub fn get(&self, factor: Factor) -> Option<MoodScore> {
        match factor {
            Factor::Energy => self.energy,
            Factor::Anxiety => self.anxiety,
            Factor::Sleep => self.sleep,
            Factor::Stress => self.stress,
        }
    }

    pub fn set(&mut self, factor: Factor, score: MoodScore) {
        let slot = match factor {
            Factor::Energy => &mut self.energy,
            Factor::Anxiety => &mut self.anxiety,
            Factor::Sleep => &mut self.sleep,
            Factor::Stress => &mut self.stress,
        };
        *slot = Some(score);
    }
}

/// A single day's check-in. Entries are created once and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub date: jiff::civil::Date,
    pub mood: MoodScore,
    #[serde(default)]
    pub factors: MoodFactors,
}

impl MoodEntry {
    pub fn new(date: jiff::civil::Date, mood: i64) -> Result<Self, CoreError> {
        Ok(Self {
            date,
            mood: MoodScore::new(mood)?,
            factors: MoodFactors::default(),
        })
    }

    /// Record a secondary factor on a freshly built entry.
    pub fn with_factor(mut self, factor: Factor, value: i64) -> Result<Self, CoreError> {
        self.factors.set(factor, MoodScore::new(value)?);
        Ok(self)
    }
}

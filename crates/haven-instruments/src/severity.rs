//! PHQ-9 severity bands and the fixed guidance attached to each.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest possible PHQ-9 total (nine items, three points each).
pub const MAX_TOTAL: u8 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    None,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

const GUIDANCE_MINIMAL: &[&str] = &[
    "Keep up the routines that are working for you",
    "Continue tracking your mood to notice changes early",
    "Rescreen if your mood changes or in a few weeks",
];

const GUIDANCE_MILD: &[&str] = &[
    "Practice self-care: regular sleep, movement, and time with people you trust",
    "Try a CBT thought record or a short guided exercise",
    "Rescreen in two weeks and talk to someone if symptoms persist",
];

const GUIDANCE_MODERATE: &[&str] = &[
    "Consider speaking with a mental health professional",
    "Share how you have been feeling with your primary care provider",
    "Keep using structured exercises and journaling between sessions",
];

const GUIDANCE_SEVERE: &[&str] = &[
    "Please reach out to a mental health professional soon",
    "Talk to your doctor about treatment options, including therapy and medication",
    "If you are in crisis or thinking about harming yourself, contact a crisis line or emergency services now",
];

impl SeverityBand {
    pub const ALL: [SeverityBand; 5] = [
        SeverityBand::None,
        SeverityBand::Mild,
        SeverityBand::Moderate,
        SeverityBand::ModeratelySevere,
        SeverityBand::Severe,
    ];

    /// Map a PHQ-9 total to its band. Totals above 27 cannot come out of a
    /// validated response and fall into `Severe`.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=4 => Self::None,
            5..=9 => Self::Mild,
            10..=14 => Self::Moderate,
            15..=19 => Self::ModeratelySevere,
            _ => Self::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None-minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately severe",
            Self::Severe => "Severe",
        }
    }

    pub fn score_range(self) -> RangeInclusive<u8> {
        match self {
            Self::None => 0..=4,
            Self::Mild => 5..=9,
            Self::Moderate => 10..=14,
            Self::ModeratelySevere => 15..=19,
            Self::Severe => 20..=MAX_TOTAL,
        }
    }

    /// Canned guidance for this band. Moderately severe and severe share a list.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::None => GUIDANCE_MINIMAL,
            Self::Mild => GUIDANCE_MILD,
            Self::Moderate => GUIDANCE_MODERATE,
            Self::ModeratelySevere | Self::Severe => GUIDANCE_SEVERE,
        }
    }
}

/// Outcome of scoring one completed PHQ-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub total_score: u8,
    pub severity: SeverityBand,
    pub recommendations: Vec<String>,
    /// Item 9 (thoughts of self-harm) was answered above zero.
    pub safety_followup: bool,
}

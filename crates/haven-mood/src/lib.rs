//! haven-mood
//!
//! Mood statistics over a caller-supplied history: windowed averages, the
//! recent-versus-previous trend, and per-day buckets for the current week.
//! Everything here is a pure function of its inputs.

pub mod error;
pub mod stats;
pub mod summary;
pub mod week;

pub use summary::{MoodSummary, aggregate_mood};

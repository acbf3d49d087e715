//! haven-instruments
//!
//! Screening instrument definitions. Pure data and pure scoring — no I/O.
//! Defines the structure, items, and scoring rules for each supported
//! questionnaire, plus the PHQ-9 severity classifier.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod severity;

pub use instruments::phq9::{ScreeningResponse, classify_screening};
pub use severity::{ScreeningResult, SeverityBand};

use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The domains and items this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Validate a set of score entries against this instrument's ranges.
    /// Entries for unknown items are ignored here.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        scores
            .iter()
            .filter_map(|entry| {
                let subscale = all_subscales.iter().find(|s| s.id == entry.subscale_id)?;
                if subscale.range.contains(entry.value) {
                    return None;
                }
                Some(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.id,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                })
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::phq9::Phq9)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Score a keyed submission for the instrument with the given ID.
pub fn score_instrument(
    id: &str,
    scores: &[ScoreEntry],
) -> Result<ScreeningResult, error::InstrumentError> {
    match id {
        "phq9" => instruments::phq9::Phq9.score(scores),
        other => Err(error::InstrumentError::UnknownInstrument(other.to_string())),
    }
}

use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("expected {expected} responses, got {actual}")]
    InvalidResponseCount { expected: usize, actual: usize },

    #[error("unknown subscale '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },

    #[error("missing score for '{subscale_id}' on instrument '{instrument_id}'")]
    MissingItem {
        instrument_id: String,
        subscale_id: String,
    },

    #[error("duplicate score for '{subscale_id}' on instrument '{instrument_id}'")]
    DuplicateItem {
        instrument_id: String,
        subscale_id: String,
    },
}

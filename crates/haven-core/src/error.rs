use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("mood score must be between 1 and 10, got {0}")]
    InvalidMoodScore(i64),
}

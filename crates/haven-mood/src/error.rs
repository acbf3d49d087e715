use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodError {
    #[error("calendar arithmetic failed: {0}")]
    Calendar(#[from] jiff::Error),
}

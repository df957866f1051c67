//! Error handling for the job matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobMatcherError {
    fn from(err: anyhow::Error) -> Self {
        JobMatcherError::Scoring(err.to_string())
    }
}

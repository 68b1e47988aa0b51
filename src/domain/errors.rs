//! Domain errors for the careerloop engine.
//!
//! The engine has no retry logic and no unrecoverable state: every failure
//! is either an input-validation rejection or a modeled domain outcome
//! (RECONSIDER is a state, not an error; roadmap ineligibility is a
//! structured negative result, not an error).

use thiserror::Error;

/// Domain-level errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid outcome: {0}. Must be one of: no_response, rejected, interview")]
    InvalidOutcome(String),

    #[error("No active strategy to record outcome for")]
    NoActiveStrategy,

    #[error("Malformed session document: {0}")]
    MalformedSession(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

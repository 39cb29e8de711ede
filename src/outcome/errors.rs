//! Outcome error types.

use thiserror::Error;

/// Errors that can occur when interpreting raw outcome data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutcomeError {
    /// Integer code does not map to a known result classification
    #[error("Unknown participant result code: {0}")]
    UnknownResultCode(i32),
}

/// Result type for outcome operations
pub type OutcomeResult<T> = std::result::Result<T, OutcomeError>;

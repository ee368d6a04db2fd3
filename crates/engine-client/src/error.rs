//! Errors raised at the recommendation engine boundary.

use thiserror::Error;

/// Errors that can occur when interacting with the recommendation engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to connect to recommendation engine: {0}")]
    ConnectionError(String),

    #[error("Recommendation request failed: {0}")]
    RequestFailed(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;

/// Returned when a preference mode string is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preference mode '{0}' (expected balanced, accuracy or ratings)")]
pub struct ParseModeError(pub String);

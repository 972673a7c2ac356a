// Rust guideline compliant 2026-02-06

//! Error types for the feedback core library.

use thiserror::Error;

/// Result type alias for feedback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feedback operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Feedback data failed validation at the creation boundary.
    #[error("Invalid feedback: {0}")]
    InvalidFeedback(String),

    /// Feedback record not found.
    #[error("Feedback not found: {0}")]
    NotFound(String),

    /// Filter selector or sort key could not be parsed.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// Rust guideline compliant 2026-02-09

//! Error handling for feedback application services.

use feedback_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested record was not found.
    NotFound,
    /// Submitted feedback failed validation.
    ValidationError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The `.feedback` directory has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded.
    ConfigError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Feedback repository not initialized at {path}. Run 'fbk init' first.")]
    RepoNotInitialized {
        /// Path where `.feedback` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidFeedback(_) => ErrorCode::ValidationError,
                CoreError::InvalidQuery(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            _ => None,
        }
    }
}

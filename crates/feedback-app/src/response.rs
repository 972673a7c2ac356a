// Rust guideline compliant 2026-02-09

//! Response envelopes for JSON command output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(SuccessEnvelope::new(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok", "result": 3 }));
    }

    #[test]
    fn test_error_envelope_omits_empty_details() {
        let err = AppError::InvalidInput("pages must be at least 1".to_string());
        let json = serde_json::to_value(ErrorEnvelope::from_error(&err)).unwrap();
        assert_eq!(json["code"], "invalid_input");
        assert!(json.get("details").is_none());
    }
}

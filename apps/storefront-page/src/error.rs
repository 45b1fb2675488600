//! # API Error Type
//!
//! Unified error type for page commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  stdin line ──► PageEvent? ── no ──► ApiError { INVALID_EVENT }         │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │                 Command                                                 │
//! │                     │                                                   │
//! │                     ├── bad price  ─┐                                   │
//! │                     ├── cart limit ─┴► CoreError ──► ApiError           │
//! │                     │                            { VALIDATION_ERROR }   │
//! │                     │                                                   │
//! │                     └── success ──► CommandResponse                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Contact-form failures and unknown cart ids are NOT errors. The former are
//! reported in the response, the latter are no-ops.

use serde::Serialize;
use storefront_core::CoreError;
use thiserror::Error;

/// Error returned from page commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price has invalid format: expected a decimal number like 9.99"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input carried by the event failed validation
    ValidationError,

    /// The event itself could not be decoded
    InvalidEvent,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidPrice { .. } | CoreError::CartLimit { .. } => {
                ApiError::validation(err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::InvalidEvent, err.to_string())
    }
}

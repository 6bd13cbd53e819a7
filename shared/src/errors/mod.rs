//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error response body used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Error codes returned in the `error` field
pub mod error_codes {
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const MISSING_TOKEN: &str = "missing_token";
    pub const INVALID_SIGNATURE: &str = "invalid_signature";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const MALFORMED_TOKEN: &str = "malformed_token";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

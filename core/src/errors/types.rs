//! Authentication and token error types

use thiserror::Error;

use crate::domain::entities::token::TokenKind;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No token of `kind` was presented with the request
    #[error("Missing {kind} token")]
    MissingToken { kind: TokenKind },
}

impl AuthError {
    pub fn missing_token(kind: TokenKind) -> Self {
        AuthError::MissingToken { kind }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Malformed token payload")]
    MalformedPayload,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the error denies authentication (surfaced as 401 Unauthorized)
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Auth(AuthError::MissingToken { .. }) => true,
            DomainError::Token(TokenError::TokenGenerationFailed) => false,
            DomainError::Token(_) => true,
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

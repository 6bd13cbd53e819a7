//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use lk_shared::config::{JwtConfig, DEVELOPMENT_SECRET};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::token::TokenKind;
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            access_token_ttl: TokenKind::Access.default_lifetime(),
            refresh_token_ttl: TokenKind::Refresh.default_lifetime(),
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with default lifetimes and the given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Builds the service configuration from the application's JWT section
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm.to_uppercase()).map_err(|_| {
            DomainError::Validation {
                message: format!("unsupported signing algorithm: {}", config.algorithm),
            }
        })?;

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_ttl: ttl_from_secs("access", config.access_token_expiry)?,
            refresh_token_ttl: ttl_from_secs("refresh", config.refresh_token_expiry)?,
        })
    }

    /// Lifetime for tokens of `kind`
    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_token_ttl,
            TokenKind::Refresh => self.refresh_token_ttl,
        }
    }
}

fn ttl_from_secs(kind: &str, secs: i64) -> Result<Duration, DomainError> {
    Duration::try_seconds(secs).ok_or_else(|| DomainError::Validation {
        message: format!("{} token expiry out of range: {}", kind, secs),
    })
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

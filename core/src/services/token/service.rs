//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken, TokenKind, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies signed access and refresh tokens
///
/// The service holds no mutable state: keys are derived once at construction
/// and every call is a pure function of its inputs, the secret and the clock.
/// Issued tokens are not recorded anywhere, so a token stays valid until its
/// embedded expiry.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if the secret is empty or the algorithm is
    /// not an HMAC algorithm.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Validation {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Validation {
                message: format!("{:?} is not a symmetric signing algorithm", config.algorithm),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is compared against the caller's clock in `verify_at`.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Lifetime applied to tokens of `kind`
    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        self.config.lifetime(kind)
    }

    /// Issues a token of `kind` for `subject`, expiring one lifetime from now
    pub fn issue(&self, subject: &str, kind: TokenKind) -> Result<IssuedToken, DomainError> {
        self.issue_at(subject, kind, Utc::now())
    }

    /// Issues a token as if the current time were `now`
    pub fn issue_at(
        &self,
        subject: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }

        let lifetime = self.lifetime(kind);
        let expires_at = now.checked_add_signed(lifetime).ok_or_else(|| {
            tracing::error!(kind = %kind, lifetime = %lifetime, "Token expiry out of range");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })?;
        let claims = Claims::new(subject, now, expires_at);
        let token = self.encode_jwt(&claims)?;

        tracing::debug!(subject = %subject, kind = %kind, exp = claims.exp, "Issued token");

        Ok(IssuedToken {
            token,
            kind,
            expires_at,
            expires_in: lifetime.num_seconds(),
        })
    }

    /// Issues an access and a refresh token for `subject` at the same instant
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, DomainError> {
        let now = Utc::now();
        let access = self.issue_at(subject, TokenKind::Access, now)?;
        let refresh = self.issue_at(subject, TokenKind::Refresh, now)?;
        Ok(TokenPair::new(access, refresh))
    }

    /// Verifies a token and returns its subject
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - signature or algorithm mismatch
    /// * `TokenError::Expired` - the current time is past the embedded expiry
    /// * `TokenError::MalformedPayload` - no subject, or the token cannot be decoded
    pub fn verify(&self, token: &str) -> Result<String, DomainError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired.into());
        }

        claims
            .subject()
            .map(str::to_string)
            .ok_or_else(|| TokenError::MalformedPayload.into())
    }

    /// Checks the signature and decodes the claims without any time check
    pub(crate) fn decode_claims(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = map_decode_error(e.kind());
                tracing::debug!(reason = %e, "Token rejected: {}", error);
                DomainError::Token(error)
            })
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }
}

fn map_decode_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
        _ => TokenError::MalformedPayload,
    }
}

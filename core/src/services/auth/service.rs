//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::{IssuedToken, TokenKind, TokenPair};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::CredentialStore;
use crate::services::token::TokenService;

use super::password::check_credentials;

/// Authentication service tying credential checks to token issuance
pub struct AuthService<C>
where
    C: CredentialStore,
{
    /// Credential store used to check logins
    credentials: Arc<C>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<C> AuthService<C>
where
    C: CredentialStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `credentials` - Store holding the known username/password pairs
    /// * `token_service` - Service issuing and verifying tokens
    pub fn new(credentials: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self {
            credentials,
            token_service,
        }
    }

    /// Token service shared with the request middleware
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Check a username/password pair and issue an access and refresh token
    ///
    /// # Arguments
    ///
    /// * `username` - Login name
    /// * `password` - Password as submitted
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Tokens for `username`
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown user
    ///   or wrong password; the two cases are not distinguished
    /// * `Err(DomainError)` - The credential store or token signing failed
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let record = self.credentials.find_by_username(username).await?;

        if !check_credentials(record.as_ref(), password) {
            tracing::info!(username = %username, "Login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.token_service.issue_pair(username)?;
        tracing::info!(username = %username, "Login succeeded");

        Ok(pair)
    }

    /// Verify an access token and return its subject
    pub fn authenticate(&self, token: &str) -> DomainResult<String> {
        self.token_service.verify(token)
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token is verified like any other token and is not
    /// rotated; it stays usable until its own expiry.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Fresh access token for the same subject
    /// * `Err(DomainError::Token(_))` - The refresh token was rejected
    pub fn refresh(&self, refresh_token: &str) -> DomainResult<IssuedToken> {
        let subject = self.token_service.verify(refresh_token)?;
        let access = self.token_service.issue(&subject, TokenKind::Access)?;

        tracing::debug!(subject = %subject, "Access token refreshed");

        Ok(access)
    }
}

impl<C> Clone for AuthService<C>
where
    C: CredentialStore,
{
    fn clone(&self) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            token_service: Arc::clone(&self.token_service),
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use lk_core::domain::entities::token::{IssuedToken, TokenPair, TOKEN_TYPE_BEARER};

/// Form body of `POST /login`
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String, // always "bearer"
}

impl From<&TokenPair> for LoginResponse {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<&IssuedToken> for RefreshResponse {
    fn from(token: &IssuedToken) -> Self {
        Self {
            access_token: token.token.clone(),
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
}

impl ProtectedResponse {
    pub fn greeting(subject: &str) -> Self {
        Self {
            message: format!("Hello, {}! You are authenticated.", subject),
        }
    }
}

//! Authentication configuration: token signing, cookies and credentials

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Secret used when none is configured. Refused in production.
pub const DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared secret for HMAC signing
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_SECRET),
            access_token_expiry: 1800,    // 30 minutes
            refresh_token_expiry: 604800, // 7 days
            algorithm: String::from("HS256"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie carrying the access token
    pub access_cookie_name: String,

    /// Cookie carrying the refresh token
    pub refresh_cookie_name: String,

    /// Cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Cookie SameSite attribute (Strict, Lax or None)
    pub same_site: String,

    /// Cookie HttpOnly flag
    pub http_only: bool,

    /// Path scope of the refresh cookie. `None` sends it on every request;
    /// `Some("/refresh")` restricts it to the refresh endpoint.
    pub refresh_cookie_path: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: String::from("jwt"),
            refresh_cookie_name: String::from("refresh_token"),
            secure: false,
            same_site: String::from("Lax"),
            http_only: true,
            refresh_cookie_path: None,
        }
    }
}

/// Fixed username to password mapping backing the static credential store.
///
/// Passwords are either plaintext or bcrypt hashes (`$2a$`, `$2b$`, `$2y$`).
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub users: HashMap<String, String>,
}

impl CredentialsConfig {
    /// Demo account used in development when no users are configured
    pub fn demo() -> Self {
        let mut users = HashMap::new();
        users.insert(String::from("alice"), String::from("secret123"));
        Self { users }
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.users.keys().collect();
        names.sort();
        f.debug_struct("CredentialsConfig")
            .field("users", &names)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Token cookie configuration
    pub cookies: CookieConfig,

    /// Credential store contents
    pub credentials: CredentialsConfig,
}

//! Credential record held by the credential store.

use std::fmt;

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];

/// Username and stored password. Read-only once loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    /// Plaintext password or bcrypt hash
    pub password: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether the stored password is a bcrypt hash
    pub fn is_hashed(&self) -> bool {
        BCRYPT_PREFIXES.iter().any(|p| self.password.starts_with(p))
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

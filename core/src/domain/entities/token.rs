//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default access token lifetime (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Default refresh token lifetime (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claim key carrying the subject identity
pub const SUBJECT_CLAIM: &str = "sub";

/// `token_type` reported to clients
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// The two token kinds differ only in lifetime and transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived, sent with every request
    Access,
    /// Long-lived, sent only to the refresh endpoint
    Refresh,
}

impl TokenKind {
    /// Lifetime used when no configuration overrides it
    pub fn default_lifetime(&self) -> Duration {
        match self {
            TokenKind::Access => Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            TokenKind::Refresh => Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
///
/// `sub` is optional on the wire so that a signed payload without a subject
/// decodes and can be reported as malformed rather than as a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` issued at `issued_at` and valid until `expires_at`
    pub fn new(subject: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: Some(subject.to_string()),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// The subject, if present and non-empty
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }

    /// A token is expired once the clock has moved past `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// A freshly signed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS string
    pub token: String,

    pub kind: TokenKind,

    /// Embedded expiry
    pub expires_at: DateTime<Utc>,

    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    pub fn new(access: IssuedToken, refresh: IssuedToken) -> Self {
        Self {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_in: access.expires_in,
            refresh_expires_in: refresh.expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_lifetimes() {
        assert_eq!(TokenKind::Access.default_lifetime(), Duration::minutes(30));
        assert_eq!(TokenKind::Refresh.default_lifetime(), Duration::days(7));
    }

    #[test]
    fn test_claims_expiry_is_issuance_plus_lifetime() {
        let now = fixed_now();
        let claims = Claims::new("alice", now, now + Duration::minutes(30));

        assert_eq!(claims.subject(), Some("alice"));
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 30 * 60);
        assert_eq!(claims.expires_at(), Some(now + Duration::minutes(30)));
    }

    #[test]
    fn test_claims_expiration_boundary() {
        let now = fixed_now();
        let claims = Claims::new("alice", now, now + Duration::seconds(10));

        assert!(!claims.is_expired_at(now));
        assert!(!claims.is_expired_at(now + Duration::seconds(10)));
        assert!(claims.is_expired_at(now + Duration::seconds(11)));
    }

    #[test]
    fn test_empty_subject_is_absent() {
        let mut claims = Claims::new("", fixed_now(), fixed_now() + Duration::minutes(1));
        assert_eq!(claims.subject(), None);

        claims.sub = None;
        assert_eq!(claims.subject(), None);
    }

    #[test]
    fn test_claims_without_subject_deserialize() {
        let claims: Claims = serde_json::from_str(r#"{"exp": 1700000000}"#).unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.iat, 0);

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get(SUBJECT_CLAIM).is_none());
    }

    #[test]
    fn test_token_pair_from_issued_tokens() {
        let now = fixed_now();
        let access = IssuedToken {
            token: "access".into(),
            kind: TokenKind::Access,
            expires_at: now + Duration::minutes(30),
            expires_in: 1800,
        };
        let refresh = IssuedToken {
            token: "refresh".into(),
            kind: TokenKind::Refresh,
            expires_at: now + Duration::days(7),
            expires_in: 604800,
        };

        let pair = TokenPair::new(access, refresh);
        assert_eq!(pair.access_token, "access");
        assert_eq!(pair.refresh_token, "refresh");
        assert_eq!(pair.access_expires_in, 1800);
        assert_eq!(pair.refresh_expires_in, 604800);
    }
}

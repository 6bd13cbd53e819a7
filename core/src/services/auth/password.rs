//! Password checks against stored credential records

use std::hint::black_box;
use std::sync::OnceLock;

use constant_time_eq::constant_time_eq;

use crate::domain::entities::credential::CredentialRecord;

/// Stand-in checked when the username is unknown
static UNKNOWN_USER: OnceLock<CredentialRecord> = OnceLock::new();

fn unknown_user_record() -> &'static CredentialRecord {
    UNKNOWN_USER.get_or_init(|| {
        let hash = bcrypt::hash("unknown-user-placeholder", bcrypt::DEFAULT_COST)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to hash unknown-user placeholder");
                String::new()
            });
        CredentialRecord::new("", hash)
    })
}

/// Checks a login attempt against an optional stored record
///
/// An unknown user still pays for a full bcrypt check, so response time
/// does not reveal which usernames exist. The result is always `false` then.
pub fn check_credentials(record: Option<&CredentialRecord>, candidate: &str) -> bool {
    check_with(record, candidate, verify_password)
}

fn check_with<F>(record: Option<&CredentialRecord>, candidate: &str, verify: F) -> bool
where
    F: Fn(&CredentialRecord, &str) -> bool,
{
    match record {
        Some(record) => verify(record, candidate),
        None => {
            black_box(verify(unknown_user_record(), candidate));
            false
        }
    }
}

/// Checks `candidate` against the stored password of `record`
///
/// Plaintext records are compared in constant time. Bcrypt records are
/// checked with `bcrypt::verify`; an unreadable hash never matches.
pub fn verify_password(record: &CredentialRecord, candidate: &str) -> bool {
    if record.is_hashed() {
        return match bcrypt::verify(candidate, &record.password) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(
                    username = %record.username,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                false
            }
        };
    }

    constant_time_eq(record.password.as_bytes(), candidate.as_bytes())
}

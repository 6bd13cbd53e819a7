//! Credential store trait defining the interface for looking up login credentials.

use async_trait::async_trait;

use crate::domain::entities::credential::CredentialRecord;
use crate::errors::DomainError;

/// Read-only lookup of credential records by username
///
/// The store is never mutated at runtime, so implementations can share their
/// contents across requests without synchronization. A real user directory
/// (database, LDAP, ...) can be substituted by implementing this trait.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use lk_core::repositories::CredentialStore;
/// use lk_core::domain::entities::CredentialRecord;
/// use lk_core::errors::DomainError;
///
/// struct DirectoryCredentialStore;
///
/// #[async_trait]
/// impl CredentialStore for DirectoryCredentialStore {
///     async fn find_by_username(
///         &self,
///         username: &str,
///     ) -> Result<Option<CredentialRecord>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the credential record for `username`
    ///
    /// # Returns
    /// * `Ok(Some(record))` - User known
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - The backing directory failed
    async fn find_by_username(&self, username: &str)
        -> Result<Option<CredentialRecord>, DomainError>;
}

//! Configuration-backed implementation of the CredentialStore trait.
//!
//! The store holds a fixed username to password map loaded once at startup.
//! It is never written after construction, so lookups need no locking and
//! the store can be shared freely between worker threads.

use async_trait::async_trait;
use std::collections::HashMap;

use lk_core::domain::entities::credential::CredentialRecord;
use lk_core::errors::DomainError;
use lk_core::repositories::CredentialStore;
use lk_shared::config::CredentialsConfig;

/// In-memory, read-only credential store
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    /// Records keyed by username
    records: HashMap<String, CredentialRecord>,
}

impl StaticCredentialStore {
    /// Create a store from a username to password map
    ///
    /// # Arguments
    /// * `users` - Map of username to plaintext password or bcrypt hash
    pub fn new(users: HashMap<String, String>) -> Self {
        let records = users
            .into_iter()
            .map(|(username, password)| {
                let record = CredentialRecord::new(username.clone(), password);
                (username, record)
            })
            .collect();

        Self { records }
    }

    /// Create a store from the `auth.credentials` configuration section
    pub fn from_config(config: &CredentialsConfig) -> Self {
        let store = Self::new(config.users.clone());

        let hashed = store.records.values().filter(|r| r.is_hashed()).count();
        tracing::info!(
            users = store.len(),
            hashed,
            "Static credential store loaded"
        );

        store
    }

    /// Number of known users
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, DomainError> {
        Ok(self.records.get(username).cloned())
    }
}

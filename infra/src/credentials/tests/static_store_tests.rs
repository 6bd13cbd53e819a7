//! Unit tests for the static credential store

use std::collections::HashMap;

use lk_core::repositories::CredentialStore;
use lk_shared::config::CredentialsConfig;

use crate::credentials::StaticCredentialStore;

#[tokio::test]
async fn test_find_known_user() {
    let store = StaticCredentialStore::from_config(&CredentialsConfig::demo());

    let record = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(record.username, "alice");
    assert_eq!(record.password, "secret123");
    assert!(!record.is_hashed());
}

#[tokio::test]
async fn test_unknown_user_is_none() {
    let store = StaticCredentialStore::from_config(&CredentialsConfig::demo());

    assert!(store.find_by_username("bob").await.unwrap().is_none());
    assert!(store.find_by_username("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let store = StaticCredentialStore::from_config(&CredentialsConfig::demo());

    assert!(store.find_by_username("Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_hashed_entries_are_kept_verbatim() {
    let hash = bcrypt::hash("hunter2", 4).unwrap();
    let mut users = HashMap::new();
    users.insert("bob".to_string(), hash.clone());
    let store = StaticCredentialStore::new(users);

    let record = store.find_by_username("bob").await.unwrap().unwrap();
    assert!(record.is_hashed());
    assert_eq!(record.password, hash);
}

#[test]
fn test_empty_store() {
    let store = StaticCredentialStore::from_config(&CredentialsConfig::default());
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);

    let store = StaticCredentialStore::from_config(
        &CredentialsConfig::demo().with_user("bob", "pw"),
    );
    assert_eq!(store.len(), 2);
}

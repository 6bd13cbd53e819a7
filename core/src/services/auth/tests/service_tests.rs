//! Unit tests for authentication service

use std::sync::Arc;

use chrono::{Duration, Utc};

use super::mocks::MockCredentialStore;
use crate::domain::entities::token::TokenKind;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::with_secret("auth-test-secret")).unwrap())
}

fn create_service(store: MockCredentialStore) -> AuthService<MockCredentialStore> {
    AuthService::new(Arc::new(store), create_token_service())
}

#[tokio::test]
async fn test_login_success_returns_token_pair() {
    let service = create_service(MockCredentialStore::new().with_user("alice", "secret123"));

    let pair = service.login("alice", "secret123").await.unwrap();

    assert_eq!(pair.access_expires_in, 1800);
    assert_eq!(pair.refresh_expires_in, 604800);
    assert_eq!(service.authenticate(&pair.access_token).unwrap(), "alice");
    assert_eq!(service.authenticate(&pair.refresh_token).unwrap(), "alice");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let service = create_service(MockCredentialStore::new().with_user("alice", "secret123"));

    let err = service.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err, DomainError::Auth(AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user_is_indistinguishable() {
    let store = MockCredentialStore::new().with_user("alice", "secret123");
    let service = create_service(store);

    let unknown = service.login("mallory", "secret123").await.unwrap_err();
    let wrong = service.login("alice", "nope").await.unwrap_err();

    assert_eq!(unknown, wrong);
    assert_eq!(unknown.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_login_with_bcrypt_record() {
    let hash = bcrypt::hash("hunter2", 4).unwrap();
    let service = create_service(MockCredentialStore::new().with_user("bob", &hash));

    assert!(service.login("bob", "hunter2").await.is_ok());
    assert!(service.login("bob", &hash).await.is_err());
}

#[tokio::test]
async fn test_login_propagates_store_failure() {
    let store = Arc::new(MockCredentialStore::failing());
    let service = AuthService::new(Arc::clone(&store), create_token_service());

    let err = service.login("alice", "secret123").await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(store.lookup_count(), 1);
}

#[test]
fn test_authenticate_rejects_bad_tokens() {
    let service = create_service(MockCredentialStore::new());

    let err = service.authenticate("garbage").unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::MalformedPayload));

    let expired = service
        .token_service()
        .issue_at("alice", TokenKind::Access, Utc::now() - Duration::hours(1))
        .unwrap();
    let err = service.authenticate(&expired.token).unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::Expired));
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let service = create_service(MockCredentialStore::new().with_user("alice", "secret123"));
    let pair = service.login("alice", "secret123").await.unwrap();

    let access = service.refresh(&pair.refresh_token).unwrap();

    assert_eq!(access.kind, TokenKind::Access);
    assert_eq!(access.expires_in, 1800);
    assert_eq!(service.authenticate(&access.token).unwrap(), "alice");
}

#[test]
fn test_refresh_rejects_expired_refresh_token() {
    let service = create_service(MockCredentialStore::new());
    let stale = service
        .token_service()
        .issue_at("alice", TokenKind::Refresh, Utc::now() - Duration::days(8))
        .unwrap();

    let err = service.refresh(&stale.token).unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::Expired));
}

#[test]
fn test_refresh_rejects_foreign_token() {
    let service = create_service(MockCredentialStore::new());
    let foreign = TokenService::new(TokenServiceConfig::with_secret("someone-else"))
        .unwrap()
        .issue("alice", TokenKind::Refresh)
        .unwrap();

    let err = service.refresh(&foreign.token).unwrap_err();
    assert_eq!(err, DomainError::Token(TokenError::InvalidSignature));
}

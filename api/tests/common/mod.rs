//! Shared setup for HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;

use lk_api::routes::auth::AppState;
use lk_core::services::{AuthService, TokenService, TokenServiceConfig};
use lk_infra::StaticCredentialStore;
use lk_shared::config::{CookieConfig, CredentialsConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = web::Data<AppState<StaticCredentialStore>>;

pub fn app_state_with(cookies: CookieConfig) -> TestState {
    let token_service =
        TokenService::new(TokenServiceConfig::with_secret(TEST_SECRET)).expect("token service");
    let credentials = StaticCredentialStore::from_config(
        &CredentialsConfig::demo().with_user("bob", "hunter2"),
    );
    let auth_service = AuthService::new(Arc::new(credentials), Arc::new(token_service));

    web::Data::new(AppState::new(Arc::new(auth_service), cookies))
}

pub fn app_state() -> TestState {
    app_state_with(CookieConfig::default())
}

/// Cookie named `name` set by the response, detached from the response
pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

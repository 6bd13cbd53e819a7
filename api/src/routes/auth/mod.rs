//! Authentication route handlers
//!
//! - Login with username and password
//! - Access to a protected resource
//! - Access token refresh

pub mod cookies;
pub mod login;
pub mod protected;
pub mod refresh;

use std::sync::Arc;

use lk_core::repositories::CredentialStore;
use lk_core::services::auth::AuthService;
use lk_shared::config::CookieConfig;

/// Application state shared across request handlers
pub struct AppState<C>
where
    C: CredentialStore,
{
    pub auth_service: Arc<AuthService<C>>,
    pub cookies: CookieConfig,
}

impl<C> AppState<C>
where
    C: CredentialStore,
{
    pub fn new(auth_service: Arc<AuthService<C>>, cookies: CookieConfig) -> Self {
        Self {
            auth_service,
            cookies,
        }
    }
}

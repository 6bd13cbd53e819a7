pub mod auth;

pub use auth::{LoginForm, LoginResponse, ProtectedResponse, RefreshResponse};
pub use lk_shared::ErrorResponse;

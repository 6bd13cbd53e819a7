//! Authentication service module
//!
//! - Username/password login issuing an access and refresh token pair
//! - Access token verification
//! - Access token refresh

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{check_credentials, verify_password};
pub use service::AuthService;

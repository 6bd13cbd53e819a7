//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{check_credentials, verify_password, AuthService};
pub use token::{TokenService, TokenServiceConfig};

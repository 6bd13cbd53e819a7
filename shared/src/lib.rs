//! Shared configuration and common types for the Latchkey server
//!
//! - Configuration types and layered loading
//! - Error response body and error codes
//! - Language selection for localized messages

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CookieConfig, CorsConfig, CredentialsConfig,
    Environment, JwtConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::Language;

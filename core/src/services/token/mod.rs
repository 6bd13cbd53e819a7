//! Token service module for JWT management
//!
//! - Access and refresh token issuance
//! - Signature and expiry verification

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;

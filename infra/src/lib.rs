//! # Infrastructure Layer
//!
//! Concrete implementations of the repository interfaces declared in
//! `lk_core`. Currently this is the configuration-backed credential store
//! used by the login endpoint.

// Re-export core types for convenience
pub use lk_core::errors::*;

/// Credential store implementations
pub mod credentials;

pub use credentials::StaticCredentialStore;

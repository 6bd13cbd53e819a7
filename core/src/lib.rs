//! # Latchkey Core
//!
//! Core domain layer for the Latchkey token service.
//! This crate contains the token and credential entities, the token and
//! authentication services, the credential store interface, and the error
//! types shared by the infrastructure and API layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;

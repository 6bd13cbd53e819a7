//! Repository interfaces implemented by the infrastructure layer.

pub mod credential;

pub use credential::CredentialStore;

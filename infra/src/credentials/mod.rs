//! Credential store implementations

pub mod static_store;

#[cfg(test)]
mod tests;

pub use static_store::StaticCredentialStore;

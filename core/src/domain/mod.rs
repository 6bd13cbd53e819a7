//! Domain layer containing business entities.

pub mod entities;

pub use entities::{Claims, CredentialRecord, IssuedToken, TokenKind, TokenPair};

//! Domain entities representing core business objects.

pub mod credential;
pub mod token;

pub use credential::CredentialRecord;
pub use token::{
    Claims, IssuedToken, TokenKind, TokenPair,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS, SUBJECT_CLAIM, TOKEN_TYPE_BEARER,
};

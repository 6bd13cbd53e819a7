pub mod error;

pub use error::{language_from_headers, request_language, ApiError};

//! Conversion of domain errors into localized HTTP error responses

use actix_web::{
    http::{
        header::{self, HeaderMap, HeaderValue},
        StatusCode,
    },
    HttpRequest, HttpResponse, ResponseError,
};
use lk_core::domain::entities::token::TokenKind;
use lk_core::errors::{AuthError, DomainError, TokenError};
use lk_shared::{error_codes, ErrorResponse, Language};
use std::fmt;

/// Detect language preference from the Accept-Language header
pub fn language_from_headers(headers: &HeaderMap) -> Language {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Detect language preference for a request
pub fn request_language(req: &HttpRequest) -> Language {
    language_from_headers(req.headers())
}

/// Error returned by handlers and middleware
///
/// Carries the response language so that the body can be localized when
/// actix renders the error.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    lang: Language,
}

impl ApiError {
    pub fn new(error: impl Into<DomainError>, lang: Language) -> Self {
        Self {
            error: error.into(),
            lang,
        }
    }

    /// Build an error localized for the language requested by `req`
    pub fn for_request(error: impl Into<DomainError>, req: &HttpRequest) -> Self {
        Self::new(error, request_language(req))
    }

    /// Request validation failure
    pub fn validation(message: impl Into<String>, lang: Language) -> Self {
        Self::new(
            DomainError::Validation {
                message: message.into(),
            },
            lang,
        )
    }

    pub fn domain_error(&self) -> &DomainError {
        &self.error
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Error code and localized message for the wrapped error
    fn code_and_message(&self) -> (&'static str, String) {
        let lang = self.lang;
        match &self.error {
            DomainError::Auth(AuthError::InvalidCredentials) => (
                error_codes::INVALID_CREDENTIALS,
                lang.localize("Invalid credentials", "用户名或密码错误").to_string(),
            ),
            DomainError::Auth(AuthError::MissingToken {
                kind: TokenKind::Refresh,
            }) => (
                error_codes::MISSING_TOKEN,
                lang.localize("Refresh token missing", "缺少刷新令牌").to_string(),
            ),
            DomainError::Auth(AuthError::MissingToken { .. }) => (
                error_codes::MISSING_TOKEN,
                lang.localize("Missing token or cookie", "缺少令牌或 Cookie").to_string(),
            ),
            DomainError::Token(TokenError::InvalidSignature) => (
                error_codes::INVALID_SIGNATURE,
                lang.localize("Invalid token signature", "令牌签名无效").to_string(),
            ),
            DomainError::Token(TokenError::Expired) => (
                error_codes::TOKEN_EXPIRED,
                lang.localize("Token has expired", "令牌已过期").to_string(),
            ),
            DomainError::Token(TokenError::MalformedPayload) => (
                error_codes::MALFORMED_TOKEN,
                lang.localize("Malformed token", "令牌格式无效").to_string(),
            ),
            DomainError::Validation { message } => (
                error_codes::VALIDATION_ERROR,
                match lang {
                    Language::English => format!("Invalid request: {}", message),
                    Language::Chinese => format!("请求参数无效：{}", message),
                },
            ),
            DomainError::Token(TokenError::TokenGenerationFailed)
            | DomainError::Internal { .. } => (
                error_codes::INTERNAL_ERROR,
                lang.localize("An internal error occurred", "发生内部错误").to_string(),
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error, Language::default())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.error {
            DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::BAD_REQUEST,
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            e if e.is_unauthorized() => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.error, "Request failed");
        } else {
            tracing::debug!(error = %self.error, status = status.as_u16(), "Request rejected");
        }

        let (code, message) = self.code_and_message();
        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer")));
        }
        builder.json(ErrorResponse::new(code, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_invalid_credentials_is_bad_request() {
        let err = ApiError::new(AuthError::InvalidCredentials, Language::English);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        assert!(resp.headers().get(header::WWW_AUTHENTICATE).is_none());

        let body = body_json(resp).await;
        assert_eq!(body["error"], "invalid_credentials");
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unauthorized_carries_bearer_challenge() {
        for error in [
            DomainError::from(TokenError::InvalidSignature),
            DomainError::from(TokenError::Expired),
            DomainError::from(TokenError::MalformedPayload),
            DomainError::from(AuthError::missing_token(TokenKind::Access)),
        ] {
            let resp = ApiError::new(error, Language::English).error_response();
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        }
    }

    #[actix_web::test]
    async fn test_missing_token_messages() {
        let access = ApiError::new(AuthError::missing_token(TokenKind::Access), Language::English);
        let body = body_json(access.error_response()).await;
        assert_eq!(body["error"], "missing_token");
        assert_eq!(body["message"], "Missing token or cookie");

        let refresh = ApiError::new(AuthError::missing_token(TokenKind::Refresh), Language::English);
        let body = body_json(refresh.error_response()).await;
        assert_eq!(body["message"], "Refresh token missing");
    }

    #[actix_web::test]
    async fn test_chinese_localization() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.8"))
            .to_http_request();
        let err = ApiError::for_request(TokenError::Expired, &req);
        assert_eq!(err.language(), Language::Chinese);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["error"], "token_expired");
        assert_eq!(body["message"], "令牌已过期");
    }

    #[test]
    fn test_internal_errors_are_server_errors() {
        let err = ApiError::from(DomainError::from(TokenError::TokenGenerationFailed));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(DomainError::Internal {
            message: "store down".into(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::validation("username: length", Language::English);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err.domain_error(), DomainError::Validation { .. }));
    }
}

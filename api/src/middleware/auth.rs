//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware takes the access token from the `Authorization: Bearer`
//! header or, when no bearer header is sent, from the access token cookie.
//! It verifies the token with the core `TokenService` and injects an
//! [`AuthContext`] into the request. Rejected requests are answered with a
//! 401 carrying `WWW-Authenticate: Bearer`.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use lk_core::{
    domain::entities::token::TokenKind,
    errors::AuthError,
    services::token::TokenService,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::{language_from_headers, request_language, ApiError};

/// Authenticated identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject claim of the verified token
    pub subject: String,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
}

impl JwtAuth {
    /// Creates a middleware verifying tokens with `token_service` and reading
    /// the fallback token from the cookie named `cookie_name`
    pub fn new(token_service: Arc<TokenService>, cookie_name: &str) -> Self {
        Self {
            token_service,
            cookie_name: Rc::from(cookie_name),
        }
    }
}

impl<S> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            cookie_name: Rc::clone(&self.cookie_name),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
}

impl<S> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);
        let cookie_name = Rc::clone(&self.cookie_name);

        Box::pin(async move {
            let lang = language_from_headers(req.headers());

            let token = match extract_token(&req, &cookie_name) {
                Some(token) => token,
                None => {
                    let error = ApiError::new(AuthError::missing_token(TokenKind::Access), lang);
                    return Ok(req.error_response(error));
                }
            };

            let subject = match token_service.verify(&token) {
                Ok(subject) => subject,
                Err(e) => return Ok(req.error_response(ApiError::new(e, lang))),
            };

            tracing::debug!(subject = %subject, "Request authenticated");
            req.extensions_mut().insert(AuthContext { subject });

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
///
/// The scheme is matched case-insensitively. A header with another scheme
/// or an empty credential yields `None`.
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Picks the token to verify: the bearer header wins over the cookie
pub fn extract_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    extract_bearer_token(req).or_else(|| {
        req.cookie(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                ApiError::new(
                    AuthError::missing_token(TokenKind::Access),
                    request_language(req),
                )
                .into()
            });

        ready(result)
    }
}

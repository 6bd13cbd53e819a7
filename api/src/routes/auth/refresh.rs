use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::domain::entities::token::TokenKind;
use lk_core::errors::AuthError;
use lk_core::repositories::CredentialStore;

use crate::dto::auth::RefreshResponse;
use crate::handlers::error::{request_language, ApiError};

use super::cookies::access_cookie;
use super::AppState;

/// Handler for POST /refresh
///
/// Exchanges the `refresh_token` cookie for a new access token. The refresh
/// token itself is left unchanged.
///
/// # Response
///
/// ## Success (200 OK)
///
/// Re-sets the `jwt` cookie.
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `missing_token` when the cookie is absent
/// - 401 Unauthorized: expired, malformed or badly signed refresh token
pub async fn refresh<C>(
    req: HttpRequest,
    state: web::Data<AppState<C>>,
) -> Result<HttpResponse, ApiError>
where
    C: CredentialStore + 'static,
{
    let lang = request_language(&req);

    let refresh_token = req
        .cookie(&state.cookies.refresh_cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::new(AuthError::missing_token(TokenKind::Refresh), lang))?;

    let access = state
        .auth_service
        .refresh(&refresh_token)
        .map_err(|e| ApiError::new(e, lang))?;

    Ok(HttpResponse::Ok()
        .cookie(access_cookie(&state.cookies, &access.token, access.expires_in))
        .json(RefreshResponse::from(&access)))
}

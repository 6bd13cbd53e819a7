use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use lk_core::repositories::CredentialStore;

use crate::dto::auth::{LoginForm, LoginResponse};
use crate::handlers::error::{request_language, ApiError};

use super::cookies::{access_cookie, refresh_cookie};
use super::AppState;

/// Handler for POST /login
///
/// Checks the submitted credentials and issues an access and a refresh token.
///
/// # Request Body (application/x-www-form-urlencoded)
///
/// ```text
/// username=alice&password=secret123
/// ```
///
/// # Response
///
/// ## Success (200 OK)
///
/// Sets the `jwt` and `refresh_token` cookies.
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `invalid_credentials` (no cookies are set)
/// - 400 Bad Request: `validation_error` for missing or out-of-range fields
/// - 500 Internal Server Error: credential store or signing failure
pub async fn login<C>(
    req: HttpRequest,
    state: web::Data<AppState<C>>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, ApiError>
where
    C: CredentialStore + 'static,
{
    let lang = request_language(&req);
    let form = form.into_inner();

    form.validate()
        .map_err(|e| ApiError::validation(e.to_string(), lang))?;

    let pair = state
        .auth_service
        .login(&form.username, &form.password)
        .await
        .map_err(|e| ApiError::new(e, lang))?;

    let cookies = &state.cookies;
    Ok(HttpResponse::Ok()
        .cookie(access_cookie(cookies, &pair.access_token, pair.access_expires_in))
        .cookie(refresh_cookie(cookies, &pair.refresh_token, pair.refresh_expires_in))
        .json(LoginResponse::from(&pair)))
}

use actix_web::HttpResponse;

use crate::dto::auth::ProtectedResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /protected
///
/// Requires the `JwtAuth` middleware. The token is taken from the
/// `Authorization: Bearer` header, or from the `jwt` cookie when no header
/// is sent.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Hello, alice! You are authenticated."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: missing, expired, malformed or badly signed token
pub async fn protected(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(ProtectedResponse::greeting(&auth.subject))
}

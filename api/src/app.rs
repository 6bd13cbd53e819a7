//! Application state and factory
//!
//! This module provides the factory for creating the Actix-web application
//! from the shared application state.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpRequest, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use lk_core::repositories::CredentialStore;
use lk_shared::{config::CorsConfig, error_codes, ErrorResponse};

use crate::handlers::error::{request_language, ApiError};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, protected::protected, refresh::refresh, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C>(
    app_state: web::Data<AppState<C>>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: CredentialStore + 'static,
{
    let jwt_auth = JwtAuth::new(
        Arc::clone(app_state.auth_service.token_service()),
        &app_state.cookies.access_cookie_name,
    );

    // Malformed or non-form login bodies get the standard error body
    let form_config = web::FormConfig::default().error_handler(|err, req| {
        ApiError::validation(err.to_string(), request_language(req)).into()
    });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(form_config)
        // Middleware: the last one registered runs first
        .wrap(create_cors(cors_config))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Token endpoints
        .route("/login", web::post().to(login::<C>))
        .route("/protected", web::get().to(protected).wrap(jwt_auth))
        .route("/refresh", web::post().to(refresh::<C>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "latchkey",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    let message = request_language(&req).localize(
        "The requested resource was not found",
        "请求的资源不存在",
    );
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, message))
}

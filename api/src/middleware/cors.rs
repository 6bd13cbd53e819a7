//! CORS middleware configuration for cross-origin requests.
//!
//! Built from the `cors` configuration section. A `*` entry in
//! `allowed_origins` gives the permissive development setup; otherwise only
//! the listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use lk_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        create_development_cors(config)
    } else {
        create_production_cors(config)
    }
}

/// Permissive configuration: any origin, any header.
///
/// With credentials enabled the request origin is echoed back instead of `*`,
/// so browsers still send the token cookies.
fn create_development_cors(config: &CorsConfig) -> Cors {
    tracing::info!(
        credentials = config.allow_credentials,
        "Configuring permissive CORS"
    );

    let cors = Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_any_header()
        .max_age(config.max_age);

    if config.allow_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}

/// Restrictive configuration: only the configured origins.
fn create_production_cors(config: &CorsConfig) -> Cors {
    tracing::info!(origins = config.allowed_origins.len(), "Configuring CORS");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::WWW_AUTHENTICATE])
        .max_age(config.max_age);

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

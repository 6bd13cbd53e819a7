use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use lk_api::{app::create_app, routes::auth::AppState, telemetry};
use lk_core::services::{AuthService, TokenService, TokenServiceConfig};
use lk_infra::StaticCredentialStore;
use lk_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting Latchkey");
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("Using the built-in development JWT secret");
    }

    // Wire services
    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)?;
    let token_service = Arc::new(TokenService::new(token_config)?);
    let credentials = Arc::new(StaticCredentialStore::from_config(&config.auth.credentials));
    let auth_service = Arc::new(AuthService::new(credentials, token_service));

    let app_state = web::Data::new(AppState::new(auth_service, config.auth.cookies.clone()));
    let cors_config = config.cors.clone();

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

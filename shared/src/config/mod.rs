//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing, cookie and credential configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Configuration is layered with the `config` crate: built-in defaults, then
//! an optional `config/<environment>.toml` file, then `LATCHKEY__*`
//! environment variables (`LATCHKEY__AUTH__JWT__SECRET`,
//! `LATCHKEY__SERVER__PORT`, `LATCHKEY__AUTH__CREDENTIALS__USERS__ALICE`, ...).
//! Keys read from the environment are lowercased by the loader.

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, CookieConfig, CredentialsConfig, JwtConfig, DEVELOPMENT_SECRET};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Prefix of environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "LATCHKEY";

/// Upper bound for configured token lifetimes (ten years)
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 10 * 365 * 24 * 60 * 60;

const SUPPORTED_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            auth: AuthConfig {
                credentials: CredentialsConfig::demo(),
                ..Default::default()
            },
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Load configuration for the environment named by `LATCHKEY_ENV`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for an explicit environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let logging = LoggingConfig::for_environment(environment);
        let cors_origins: Vec<String> = if environment.is_development() {
            vec![String::from("*")]
        } else {
            Vec::new()
        };

        let settings = ::config::Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", format!("{:?}", logging.format).to_lowercase())?
            .set_default("logging.source_location", logging.source_location)?
            .set_default("cors.allowed_origins", cors_origins)?
            .set_default("auth.cookies.secure", environment.is_production())?
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: AppConfig = settings.try_deserialize()?;
        app.apply_environment_defaults();
        app.validate()?;
        Ok(app)
    }

    /// Seed development-only fallbacks that cannot be expressed as plain defaults
    fn apply_environment_defaults(&mut self) {
        if self.environment.is_development() && self.auth.credentials.users.is_empty() {
            tracing::warn!("No credentials configured, seeding the development demo user");
            self.auth.credentials = CredentialsConfig::demo();
        }
    }

    /// Check the configuration for values the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jwt = &self.auth.jwt;

        if jwt.secret.is_empty() {
            return Err(ConfigError::invalid("auth.jwt.secret must not be empty"));
        }
        if self.environment.is_production() && jwt.is_using_default_secret() {
            return Err(ConfigError::invalid(
                "auth.jwt.secret must be set in production",
            ));
        }
        if jwt.access_token_expiry <= 0 || jwt.refresh_token_expiry <= 0 {
            return Err(ConfigError::invalid("token expiry must be positive"));
        }
        if jwt.access_token_expiry > MAX_TOKEN_EXPIRY_SECS
            || jwt.refresh_token_expiry > MAX_TOKEN_EXPIRY_SECS
        {
            return Err(ConfigError::invalid(format!(
                "token expiry must not exceed {} seconds",
                MAX_TOKEN_EXPIRY_SECS
            )));
        }
        if !SUPPORTED_ALGORITHMS.contains(&jwt.algorithm.to_uppercase().as_str()) {
            return Err(ConfigError::invalid(format!(
                "unsupported signing algorithm: {}",
                jwt.algorithm
            )));
        }
        if !matches!(
            self.auth.cookies.same_site.to_lowercase().as_str(),
            "strict" | "lax" | "none"
        ) {
            return Err(ConfigError::invalid(format!(
                "invalid SameSite value: {}",
                self.auth.cookies.same_site
            )));
        }
        if self.auth.credentials.users.is_empty() {
            tracing::warn!("Credential store is empty, every login will be rejected");
        }

        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

//! Tracing subscriber setup

use lk_shared::config::{LogFormat, LoggingConfig};
use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError, EnvFilter, Layer,
};

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Build the event filter. `RUST_LOG` overrides the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level),
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let location = config.source_location;

    let layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(location)
            .with_line_number(location)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_file(location)
            .with_line_number(location)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_file(location)
            .with_line_number(location)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()?;

    Ok(())
}

//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::observability::{LogFormat, LoggingConfig};

use super::ObservabilityError;

const QUIET_DEPENDENCIES: &str = "h2=warn,hyper=warn,sqlx=warn";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `--log-level` when it holds a valid filter.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => env_filter(&config.log_level)?,
    };

    match config.log_format {
        LogFormat::Compact => install(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        ),
        LogFormat::Json => install(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
        ),
    }
}

fn env_filter(log_level: &str) -> Result<EnvFilter, ObservabilityError> {
    Ok(EnvFilter::try_new(format!("{log_level},{QUIET_DEPENDENCIES}"))?)
}

fn install<L>(filter: EnvFilter, layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

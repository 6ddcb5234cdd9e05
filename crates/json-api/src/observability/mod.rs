//! Logging setup and request tracing middleware.

use thiserror::Error;

mod logging;
mod request;

pub(crate) use logging::init;
pub(crate) use request::RequestLogging;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

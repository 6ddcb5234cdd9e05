//! Graceful shutdown on Ctrl+C or SIGTERM.

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to listen for Ctrl+C: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to listen for SIGTERM: {0}")]
    Terminate(#[source] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Interrupt,
    Terminate,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("ctrl_c"),
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

/// Wait for a shutdown signal, then let in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    tracing::info!(%signal, "shutdown signal received, draining connections");

    handle.stop_graceful(None);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<Signal, ShutdownSignalError> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?;

    tokio::select! {
        result = signal::ctrl_c() => result
            .map(|()| Signal::Interrupt)
            .map_err(ShutdownSignalError::Interrupt),
        _ = terminate.recv() => Ok(Signal::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<Signal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map(|()| Signal::Interrupt)
        .map_err(ShutdownSignalError::Interrupt)
}

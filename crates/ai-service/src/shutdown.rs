//! Graceful shutdown signal handling.

use crate::error::ServerError;

/// Process signals that stop the server, registered before the server starts
/// so a registration failure is reported instead of surfacing mid-shutdown.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownSignal {
    /// Registers SIGINT and SIGTERM handlers (Ctrl+C only on non-unix).
    #[cfg(unix)]
    pub fn install() -> Result<Self, ServerError> {
        use tokio::signal::unix::{SignalKind, signal};

        let interrupt = signal(SignalKind::interrupt()).map_err(|source| ServerError::Signal {
            signal: "SIGINT",
            source,
        })?;
        let terminate = signal(SignalKind::terminate()).map_err(|source| ServerError::Signal {
            signal: "SIGTERM",
            source,
        })?;

        Ok(Self {
            interrupt,
            terminate,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self, ServerError> {
        Ok(Self {})
    }

    /// Resolves once the first shutdown signal arrives.
    #[cfg(unix)]
    pub async fn recv(mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => {
                tracing::info!("received SIGINT, starting graceful shutdown");
            }
            _ = self.terminate.recv() => {
                tracing::info!("received SIGTERM, starting graceful shutdown");
            }
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, starting graceful shutdown"),
            Err(err) => {
                tracing::error!(error = %err, "Ctrl+C handler failed, shutdown only by process exit");
                std::future::pending::<()>().await;
            }
        }
    }
}

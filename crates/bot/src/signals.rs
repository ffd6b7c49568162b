//! Process signals: SIGHUP asks for a catalogue reload, Ctrl-C/SIGTERM stop the bot.

use std::sync::Arc;

use tokio::sync::Notify;

/// Shared reload request.
///
/// Requests made while the runner is busy are kept (one pending permit), so a
/// SIGHUP is never lost between two polls.
#[derive(Debug, Clone, Default)]
pub struct ReloadSignal {
    notify: Arc<Notify>,
}

impl ReloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.notify.notify_one();
    }

    /// Wait for the next reload request.
    pub async fn requested(&self) {
        self.notify.notified().await;
    }
}

/// Spawn the SIGHUP listener that feeds `reload`.
#[cfg(unix)]
pub fn spawn_sighup_handler(reload: ReloadSignal) {
    use tokio::signal::unix::{SignalKind, signal};

    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to register SIGHUP handler");
                return;
            }
        };

        tracing::info!("SIGHUP handler registered; send SIGHUP to reload the catalogue");

        while sighup.recv().await.is_some() {
            tracing::info!("SIGHUP received, catalogue reload requested");
            reload.request();
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_sighup_handler(_reload: ReloadSignal) {
    tracing::debug!("catalogue reload on SIGHUP is only available on unix");
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

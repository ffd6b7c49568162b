//! Polling loop: fetch messages, dispatch against the current catalogue, send replies.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bokfinder_infra::{CatalogueHandle, CataloguePaths};

use crate::dispatcher::Dispatcher;
use crate::signals::ReloadSignal;
use crate::transport::{ChatTransport, IncomingMessage};

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Serves one transport until shutdown.
///
/// Messages are handled one at a time in arrival order. Each message is
/// answered from the catalogue snapshot current when it is picked up.
/// Shutdown takes priority over a pending reload, which takes priority over
/// the next poll.
pub struct Runner<T> {
    transport: T,
    catalogue: Arc<CatalogueHandle>,
    dispatcher: Dispatcher,
    paths: CataloguePaths,
    reload: ReloadSignal,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl<T: ChatTransport> Runner<T> {
    pub fn new(
        transport: T,
        catalogue: Arc<CatalogueHandle>,
        dispatcher: Dispatcher,
        paths: CataloguePaths,
        reload: ReloadSignal,
    ) -> Self {
        Self {
            transport,
            catalogue,
            dispatcher,
            paths,
            reload,
            initial_backoff: INITIAL_BACKOFF,
            max_backoff: MAX_BACKOFF,
        }
    }

    /// Override the retry delays used after a failed poll.
    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max.max(initial);
        self
    }

    /// Run until `shutdown` resolves, then hand the transport back.
    pub async fn run<S>(mut self, shutdown: S) -> T
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut backoff = self.initial_backoff;
        tracing::info!("bot runner started");

        loop {
            let polled = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = self.reload.requested() => {
                    self.reload_catalogue().await;
                    continue;
                }
                polled = self.transport.poll() => polled,
            };

            match polled {
                Ok(messages) => {
                    backoff = self.initial_backoff;
                    for message in messages {
                        self.handle_message(message).await;
                    }
                }
                Err(e) => {
                    let retry_in_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX);
                    tracing::warn!(error = %e, retry_in_ms, "polling failed");
                    tokio::select! {
                        _ = &mut shutdown => break,
                        _ = tokio::time::sleep(backoff) => {}
                    }
                    backoff = (backoff * 2).min(self.max_backoff);
                }
            }
        }

        tracing::info!("bot runner stopped");
        self.transport
    }

    /// Answer a single message.
    pub async fn handle_message(&self, message: IncomingMessage) {
        let catalogue = self.catalogue.snapshot();
        let replies = self.dispatcher.handle(&catalogue, &message.text);
        tracing::info!(chat_id = message.chat_id, replies = replies.len(), "handled message");

        for reply in replies.iter().filter(|r| !r.text.is_empty()) {
            if let Err(e) = self.transport.send(message.chat_id, reply).await {
                tracing::warn!(chat_id = message.chat_id, error = %e, "failed to send reply");
            }
        }
    }

    async fn reload_catalogue(&self) {
        let handle = Arc::clone(&self.catalogue);
        let paths = self.paths.clone();

        match tokio::task::spawn_blocking(move || handle.reload(&paths)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "catalogue reload failed; keeping previous catalogue")
            }
            Err(e) => tracing::warn!(error = %e, "catalogue reload task failed"),
        }
    }
}

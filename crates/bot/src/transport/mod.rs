//! Chat transport abstraction.
//!
//! The runner only needs two operations: fetch the next batch of messages and
//! send a reply. `telegram` implements them over the Bot API; tests use an
//! in-memory transport.

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

use crate::reply::Reply;

pub use telegram::TelegramTransport;

/// A text message received from a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    /// Empty when the message carried no text (stickers, photos, ...).
    pub text: String,
}

impl IncomingMessage {
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error: {description}")]
    Api { description: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Wait for the next batch of messages (possibly empty).
    async fn poll(&mut self) -> Result<Vec<IncomingMessage>, TransportError>;

    /// Deliver one reply to a chat.
    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), TransportError>;
}

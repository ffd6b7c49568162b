//! Telegram Bot API transport (long polling).

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use bokfinder_infra::BotConfig;

use crate::reply::Reply;
use crate::transport::{ChatTransport, IncomingMessage, TransportError};

/// Extra time the HTTP client waits beyond the long-poll timeout.
const REQUEST_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Serialize)]
struct GetUpdates {
    offset: i64,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup<'a>>,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardMarkup<'a> {
    inline_keyboard: Vec<Vec<InlineKeyboardButton<'a>>>,
}

#[derive(Debug, Serialize)]
struct InlineKeyboardButton<'a> {
    text: &'a str,
    url: &'a str,
}

impl<'a> SendMessage<'a> {
    fn new(chat_id: i64, reply: &'a Reply) -> Self {
        let reply_markup = reply.has_buttons().then(|| InlineKeyboardMarkup {
            inline_keyboard: reply
                .buttons
                .iter()
                .filter(|row| !row.is_empty())
                .map(|row| {
                    row.iter()
                        .map(|b| InlineKeyboardButton {
                            text: &b.label,
                            url: &b.url,
                        })
                        .collect()
                })
                .collect(),
        });

        Self {
            chat_id,
            text: &reply.text,
            reply_markup,
        }
    }
}

/// Long-polling Bot API client.
///
/// Tracks the update offset itself: every `poll` confirms the updates returned
/// by the previous one. Not `Debug`: the endpoint embeds the bot token.
pub struct TelegramTransport {
    client: reqwest::Client,
    endpoint: String,
    offset: i64,
    poll_timeout: Duration,
    debug: bool,
}

impl TelegramTransport {
    pub fn new(config: &BotConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.poll_timeout + REQUEST_GRACE)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/bot{}", config.api_base_url, config.telegram_token),
            offset: 0,
            poll_timeout: config.poll_timeout,
            debug: config.debug,
        })
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + std::fmt::Debug + Sync,
        T: DeserializeOwned,
    {
        if self.debug {
            tracing::debug!(method, request = ?body, "telegram request");
        }

        let response = self
            .client
            .post(format!("{}/{}", self.endpoint, method))
            .json(body)
            .send()
            .await?;
        let bytes = response.bytes().await?;

        if self.debug {
            tracing::debug!(method, response = %String::from_utf8_lossy(&bytes), "telegram response");
        }

        decode_response(&bytes)
    }
}

fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, TransportError> {
    let response: ApiResponse<T> =
        serde_json::from_slice(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    if !response.ok {
        return Err(TransportError::Api {
            description: response
                .description
                .unwrap_or_else(|| "request rejected without description".to_string()),
        });
    }

    response
        .result
        .ok_or_else(|| TransportError::Decode("ok response without result".to_string()))
}

/// Turn a batch of updates into messages and advance `offset` past all of them.
///
/// Updates that carry no message are confirmed but skipped.
fn collect_messages(updates: Vec<Update>, offset: &mut i64) -> Vec<IncomingMessage> {
    let mut messages = Vec::with_capacity(updates.len());
    for update in updates {
        *offset = (*offset).max(update.update_id + 1);
        if let Some(message) = update.message {
            messages.push(IncomingMessage::new(
                message.chat.id,
                message.text.unwrap_or_default(),
            ));
        }
    }
    messages
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn poll(&mut self) -> Result<Vec<IncomingMessage>, TransportError> {
        let request = GetUpdates {
            offset: self.offset,
            timeout: self.poll_timeout.as_secs(),
            allowed_updates: ["message"],
        };
        let updates: Vec<Update> = self.call("getUpdates", &request).await?;
        Ok(collect_messages(updates, &mut self.offset))
    }

    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<(), TransportError> {
        let request = SendMessage::new(chat_id, reply);
        let _sent: serde_json::Value = self.call("sendMessage", &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::InlineButton;
    use serde_json::json;

    fn updates(value: serde_json::Value) -> Vec<Update> {
        decode_response(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn collects_text_messages_and_advances_offset() {
        let batch = updates(json!({
            "ok": true,
            "result": [
                {"update_id": 10, "message": {"message_id": 1, "chat": {"id": 42, "type": "private"}, "text": "python"}},
                {"update_id": 11, "edited_message": {"message_id": 1, "chat": {"id": 42}}},
                {"update_id": 12, "message": {"message_id": 2, "chat": {"id": 7}, "sticker": {}}}
            ]
        }));

        let mut offset = 0;
        let messages = collect_messages(batch, &mut offset);

        assert_eq!(offset, 13);
        assert_eq!(
            messages,
            vec![IncomingMessage::new(42, "python"), IncomingMessage::new(7, "")]
        );
    }

    #[test]
    fn empty_batch_keeps_offset() {
        let mut offset = 5;
        assert!(collect_messages(Vec::new(), &mut offset).is_empty());
        assert_eq!(offset, 5);
    }

    #[test]
    fn rejected_request_is_api_error() {
        let body = json!({"ok": false, "error_code": 401, "description": "Unauthorized"});
        let err = decode_response::<Vec<Update>>(body.to_string().as_bytes()).unwrap_err();
        match err {
            TransportError::Api { description } => assert_eq!(description, "Unauthorized"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_body_is_decode_error() {
        let err = decode_response::<Vec<Update>>(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn send_message_carries_one_button_per_row() {
        let reply = Reply {
            text: "\n\n📖 Judul: Belajar Python".to_string(),
            buttons: vec![
                vec![InlineButton::new("Amazon", "https://a.co/1")],
                vec![InlineButton::new("Shopee", "https://shp.ee/1")],
            ],
        };

        let body = serde_json::to_value(SendMessage::new(42, &reply)).unwrap();
        assert_eq!(
            body,
            json!({
                "chat_id": 42,
                "text": "\n\n📖 Judul: Belajar Python",
                "reply_markup": {"inline_keyboard": [
                    [{"text": "Amazon", "url": "https://a.co/1"}],
                    [{"text": "Shopee", "url": "https://shp.ee/1"}]
                ]}
            })
        );
    }

    #[test]
    fn plain_reply_has_no_markup() {
        let body = serde_json::to_value(SendMessage::new(1, &Reply::text("hai"))).unwrap();
        assert_eq!(body, json!({"chat_id": 1, "text": "hai"}));
    }

    #[test]
    fn endpoint_embeds_token() {
        let config = BotConfig::from_lookup(|key| match key {
            "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
            "TELEGRAM_API_URL" => Some("http://127.0.0.1:9".to_string()),
            _ => None,
        })
        .unwrap();

        let transport = TelegramTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint, "http://127.0.0.1:9/bot123:abc");
        assert_eq!(transport.offset, 0);
    }
}

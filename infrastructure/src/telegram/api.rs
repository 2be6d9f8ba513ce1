//! Telegram Bot API client
//!
//! Implements [`Messenger`] over the plain HTTPS Bot API. Only
//! `sendMessage` is needed: inbound traffic arrives through the webhook
//! route, not through polling.

use async_trait::async_trait;
use rica_application::{Messenger, MessengerError};
use rica_domain::truncate_str;
use std::time::Duration;
use tracing::debug;

const BOT_API_ROOT: &str = "https://api.telegram.org";

/// Messenger backed by the Telegram Bot API
pub struct TelegramApi {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramApi {
    pub fn new(bot_token: &str) -> Result<Self, MessengerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MessengerError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: bot_url(BOT_API_ROOT, bot_token),
        })
    }
}

#[async_trait]
impl Messenger for TelegramApi {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), MessengerError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| MessengerError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MessengerError::Rejected {
                status: status.as_u16(),
                message: truncate_str(&message, 200).to_string(),
            });
        }

        Ok(())
    }
}

fn bot_url(root: &str, token: &str) -> String {
    format!("{}/bot{}", root, token)
}

//! Messenger port
//!
//! Interface for the messaging provider's send-message capability, used by
//! the webhook bridge to relay replies back to the originating chat.

use async_trait::async_trait;
use thiserror::Error;

/// Errors when sending a chat message
#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Provider rejected the message with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Other error: {0}")]
    Other(String),
}

/// Outbound chat message capability
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `text` to the chat identified by `chat_id`
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), MessengerError>;
}

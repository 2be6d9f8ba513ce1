//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted language model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication rejected by provider")]
    Unauthorized,

    #[error("Model returned an empty completion")]
    EmptyCompletion,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// The model capability is opaque to the application layer: one prompt in,
/// one completion out. Implementations (adapters) live in the infrastructure
/// layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Submit a prompt pair and return the completion text
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;
}

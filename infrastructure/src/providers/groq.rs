//! Groq chat-completions adapter
//!
//! Implements [`LlmGateway`] over Groq's OpenAI-compatible
//! `/chat/completions` endpoint. One prompt pair in, one completion out,
//! with no streaming, tool use, or conversation state.

use crate::config::ModelSettings;
use async_trait::async_trait;
use rica_application::{GatewayError, LlmGateway};
use rica_domain::truncate_str;
use std::time::Duration;
use tracing::debug;

/// Gateway to Groq's hosted models
pub struct GroqGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
}

impl GroqGateway {
    pub fn new(settings: &ModelSettings, api_key: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LlmGateway for GroqGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
        });

        debug!("Sending completion request to model {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(GatewayError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                message: truncate_str(&message, 200).to_string(),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        parse_completion(&json)
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::Connection(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

/// Extract the completion text from a chat-completions response body.
fn parse_completion(json: &serde_json::Value) -> Result<String, GatewayError> {
    let text = json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .unwrap_or("")
        .trim();

    if text.is_empty() {
        return Err(GatewayError::EmptyCompletion);
    }
    Ok(text.to_string())
}

//! HTTP ask-endpoint client
//!
//! Implements [`InquiryClient`] for the webhook bridge: the relay reaches the
//! resolver the same way any external caller does, through `POST
//! /manager/ask` over the network with a bounded timeout.

use async_trait::async_trait;
use rica_application::{AskRequest, AskResponse, InquiryClient, InquiryClientError};
use std::time::Duration;
use tracing::debug;

/// Client for a remote (or local) ask endpoint
pub struct HttpInquiryClient {
    client: reqwest::Client,
    ask_url: String,
}

impl HttpInquiryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InquiryClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InquiryClientError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            ask_url: format!("{}/manager/ask", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl InquiryClient for HttpInquiryClient {
    async fn ask(&self, query_text: &str) -> Result<AskResponse, InquiryClientError> {
        debug!("Forwarding query to {}", self.ask_url);

        let request = AskRequest {
            query_text: query_text.to_string(),
        };

        let response = self
            .client
            .post(&self.ask_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InquiryClientError::Timeout
                } else {
                    InquiryClientError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InquiryClientError::Status(status.as_u16()));
        }

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| InquiryClientError::MalformedResponse(e.to_string()))
    }
}

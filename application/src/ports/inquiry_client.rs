//! Inquiry endpoint client port
//!
//! The webhook bridge does not resolve inquiries in-process: it calls the
//! HTTP ask endpoint over the network, exactly like any external client
//! would. This port is that network call, and the request/response DTOs here
//! are the endpoint's wire contract (the axum routes reuse them).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for `POST /manager/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub query_text: String,
}

/// Response body for `POST /manager/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
    pub original_query: String,
}

/// Errors when calling the ask endpoint
#[derive(Error, Debug)]
pub enum InquiryClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Ask endpoint returned status {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}

/// Client for the HTTP ask endpoint
#[async_trait]
pub trait InquiryClient: Send + Sync {
    /// Submit a query and return the endpoint's reply
    async fn ask(&self, query_text: &str) -> Result<AskResponse, InquiryClientError>;
}

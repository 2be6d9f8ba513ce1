//! API routes
//!
//! The ask endpoint does its validation before the resolver is ever
//! involved, and maps resolver failures to client- or server-errors without
//! leaking upstream detail. The webhook route acknowledges the provider
//! first and hands the real work to a detached task.

use crate::http::server::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use rica_application::{AskRequest, AskResponse, ResolveError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generic message for model-capability failures. The raw upstream error is
/// logged, never returned to the caller.
const UPSTREAM_ERROR_MESSAGE: &str =
    "The assistant is temporarily unavailable. Please try again later.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

// ============================================================================
// Manager Routes
// ============================================================================

pub fn manager_routes() -> Router<AppStateArc> {
    Router::new().route("/manager/ask", post(ask))
}

async fn ask(
    State(state): State<AppStateArc>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorBody>)> {
    if request.query_text.trim().is_empty() {
        return Err(bad_request("query_text must not be empty"));
    }

    match state.resolver.resolve(None, &request.query_text).await {
        Ok(resolution) => Ok(Json(AskResponse {
            response: resolution.response_text().to_string(),
            original_query: resolution.original_query().to_string(),
        })),
        Err(ResolveError::Invalid(e)) => Err(bad_request(&e.to_string())),
        Err(ResolveError::Gateway(e)) => {
            error!("Gateway failure while resolving inquiry: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: UPSTREAM_ERROR_MESSAGE.to_string(),
                }),
            ))
        }
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

// ============================================================================
// Meta Routes
// ============================================================================

pub fn meta_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/status", get(api_status))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to RICA API",
        "version": VERSION,
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "RICA API is running successfully".to_string(),
    })
}

async fn api_status(State(state): State<AppStateArc>) -> Json<serde_json::Value> {
    let mut endpoints = vec!["/", "/health", "/api/v1/status", "/manager/ask"];
    if state.relay.is_some() {
        endpoints.push("/telegram/webhook");
    }
    Json(serde_json::json!({
        "api_version": "v1",
        "status": "operational",
        "endpoints": endpoints,
    }))
}

// ============================================================================
// Telegram Routes
// ============================================================================

pub fn telegram_routes() -> Router<AppStateArc> {
    Router::new().route("/telegram/webhook", post(telegram_webhook))
}

/// Acknowledge the delivery, then process it.
///
/// The provider redelivers updates whose webhook call fails, so the handler
/// answers `{"ok": true}` the moment the body parses and leaves the
/// ask-and-reply sequence to a detached task. Malformed JSON is rejected by
/// the extractor with a 400 before this body runs.
async fn telegram_webhook(
    State(state): State<AppStateArc>,
    Json(update): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    if let Some(relay) = &state.relay {
        let relay = relay.clone();
        tokio::spawn(async move {
            let outcome = relay.execute(update).await;
            info!("Webhook update processed: {:?}", outcome);
        });
    }

    Json(serde_json::json!({"ok": true}))
}

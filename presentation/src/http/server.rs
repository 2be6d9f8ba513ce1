//! HTTP server wiring

use crate::http::routes;
use rica_application::{RelayUpdateUseCase, ResolveInquiryUseCase};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub resolver: Arc<ResolveInquiryUseCase>,
    /// Present only when a bot token is configured; without it the
    /// Telegram routes are not mounted at all.
    pub relay: Option<Arc<RelayUpdateUseCase>>,
}

impl AppState {
    pub fn new(resolver: Arc<ResolveInquiryUseCase>) -> Self {
        Self {
            resolver,
            relay: None,
        }
    }

    /// Attach the Telegram bridge
    pub fn with_relay(mut self, relay: Arc<RelayUpdateUseCase>) -> Self {
        self.relay = Some(relay);
        self
    }
}

/// Run the HTTP server until ctrl-c
pub async fn run(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let telegram_enabled = state.relay.is_some();
    let state = Arc::new(state);

    let mut app = axum::Router::new()
        .merge(routes::manager_routes())
        .merge(routes::meta_routes());

    if telegram_enabled {
        app = app.merge(routes::telegram_routes());
    } else {
        warn!("Telegram bridge disabled: no bot token configured");
    }

    let app = app.with_state(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    // Failure to install the handler leaves only kill -9; surface it loudly.
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

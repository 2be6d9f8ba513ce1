//! HTTP API surface
//!
//! Routes are grouped the way they are mounted: the manager (ask) routes,
//! the meta routes (root, health, status), and the Telegram webhook.

pub mod routes;
pub mod server;

pub use server::AppState;

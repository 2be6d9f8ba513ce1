//! Presentation layer for RICA
//!
//! This crate contains the HTTP API, the interactive REPL, CLI definitions,
//! and console output formatting. Each surface normalizes its own transport
//! into the application layer's use cases and renders the results back out.

pub mod chat;
pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{AssistantRepl, ReplMode};
pub use cli::commands::{Cli, LogLevel};
pub use http::{AppState, server};
pub use output::console::{StatusInfo, StatusFormatter};
pub use progress::spinner::ThinkingSpinner;

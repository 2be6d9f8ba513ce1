//! Infrastructure layer for RICA
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod inquiry_client;
pub mod providers;
pub mod telegram;

#[cfg(feature = "voice")]
pub mod audio;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, Settings};
pub use inquiry_client::HttpInquiryClient;
pub use providers::GroqGateway;
pub use telegram::TelegramApi;

#[cfg(feature = "voice")]
pub use audio::{CommandSynthesizer, GroqWhisperRecognizer};

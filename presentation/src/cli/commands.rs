//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Logging level selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The tracing filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// CLI arguments for rica
#[derive(Parser, Debug)]
#[command(name = "rica")]
#[command(author, version, about = "RICA - Rather Intelligent Conversational Assistant")]
#[command(long_about = r#"
RICA answers inquiries through whichever surface suits you: an interactive
terminal session (typed or spoken), an HTTP API, or a Telegram bot webhook
served alongside the API.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./rica.toml              Project-level config
3. ~/.config/rica/config.toml   Global config

Credentials come from GROQ_API_KEY and TELEGRAM_TOKEN (or the matching
config keys).

Example:
  rica                      # interactive mode (type, or switch to voice)
  rica --text               # text-only conversation
  rica --voice              # hands-free conversation
  rica --serve --port 8000  # HTTP API + Telegram webhook
  rica --status             # show configuration and audio devices
"#)]
pub struct Cli {
    /// Run the HTTP API server instead of a conversation
    #[arg(long)]
    pub serve: bool,

    /// Voice-only conversation mode
    #[arg(long)]
    pub voice: bool,

    /// Text-only conversation mode
    #[arg(long)]
    pub text: bool,

    /// Show system status and exit
    #[arg(long)]
    pub status: bool,

    /// Test audio system components and exit
    #[arg(long)]
    pub test_audio: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host for the API server
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port for the API server
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Enable debug mode (debug logging, detailed turn errors)
    #[arg(long)]
    pub debug: bool,

    /// Set logging level
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

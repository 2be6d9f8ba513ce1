//! Settings data types
//!
//! These structs represent the exact structure of the TOML config file and
//! the matching `RICA_*` environment variables. They are deserialized
//! directly; every field has a default so a missing file is never an error.
//! Only missing credentials are, and only for the modes that need them.

use rica_application::ResolverSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),
}

/// Complete process configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server bind settings
    pub server: ServerSettings,
    /// Language-model provider settings
    pub model: ModelSettings,
    /// Resolver behavior (default inquirer, review stage)
    pub resolver: ResolverSettings,
    /// Telegram bridge settings
    pub telegram: TelegramSettings,
    /// Microphone and speech settings
    pub audio: AudioSettings,
    /// Logging settings
    pub log: LogSettings,
}

impl Settings {
    /// The model API key, required by every mode that talks to the model.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.model
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingSetting(
                "model.api_key (or GROQ_API_KEY)",
            ))
    }

    /// The bot token, required only when serving the Telegram webhook.
    pub fn require_bot_token(&self) -> Result<&str, ConfigError> {
        self.telegram
            .bot_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingSetting(
                "telegram.bot_token (or TELEGRAM_TOKEN)",
            ))
    }
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// `[model]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Provider API key; usually supplied via `GROQ_API_KEY`.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    /// OpenAI-compatible API root.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout_secs: 120,
        }
    }
}

/// `[telegram]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramSettings {
    /// Bot token; usually supplied via `TELEGRAM_TOKEN`.
    pub bot_token: Option<String>,
    /// Base URL of the ask endpoint the bridge calls over the network.
    /// Points at this very process by default, but may be a public tunnel
    /// URL when the webhook and the resolver run on different hosts.
    pub ask_endpoint: String,
    pub timeout_secs: u64,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            ask_endpoint: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// `[audio]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub channels: u16,
    /// Upper bound on one utterance capture, in seconds.
    pub capture_secs: u64,
    /// Transcription model identifier.
    pub whisper_model: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            channels: 1,
            capture_secs: 5,
            whisper_model: "whisper-large-v3-turbo".to_string(),
        }
    }
}

/// `[log]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

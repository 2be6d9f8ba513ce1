//! Application-level configuration.
//!
//! [`ResolverSettings`] controls how the resolve-inquiry use case behaves:
//! the placeholder identity for anonymous surfaces and whether the review
//! stage runs.

use serde::{Deserialize, Serialize};

/// Behavior settings for inquiry resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Identity used when a surface has no inquirer of its own
    /// (the HTTP endpoint and the Telegram bridge).
    pub default_inquirer: String,

    /// Whether the quality-review stage runs after the draft stage.
    pub enable_review: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_inquirer: "a user".to_string(),
            enable_review: true,
        }
    }
}

//! Configuration loader with multi-source merging

use super::settings::{ConfigError, Settings};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GROQ_API_KEY` / `TELEGRAM_TOKEN` (conventional credential vars)
    /// 2. `RICA_*` environment variables (`RICA_SERVER__PORT=9000`)
    /// 3. Explicit config path (if provided; must exist)
    /// 4. Project root: `./rica.toml` or `./.rica.toml`
    /// 5. XDG config: `~/.config/rica/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<Settings, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        // Global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Project-level config files (check both names)
        for filename in &["rica.toml", ".rica.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit config path; unlike the discovered files, a path the user
        // asked for must actually be there.
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            figment = figment.merge(Toml::file(path));
        }

        // Environment overrides
        figment = figment.merge(Env::prefixed("RICA_").split("__"));
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            figment = figment.merge(Serialized::global("model.api_key", key));
        }
        if let Ok(token) = std::env::var("TELEGRAM_TOKEN") {
            figment = figment.merge(Serialized::global("telegram.bot_token", token));
        }

        figment.extract().map_err(Box::new).map_err(ConfigError::from)
    }

    /// Load only default configuration (no files, no environment)
    pub fn load_defaults() -> Settings {
        Settings::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/rica/config.toml` if set, otherwise falls
    /// back to `~/.config/rica/config.toml`.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rica").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["rica.toml", ".rica.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let settings = ConfigLoader::load_defaults();
        assert_eq!(settings.server.port, 8000);
        assert!(settings.model.api_key.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if the file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("rica"));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/rica.toml");
        let result = ConfigLoader::load(Some(&path));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::FileNotFound(_)
        ));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[telegram]
timeout_secs = 10
"#
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let settings = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.telegram.timeout_secs, 10);
        // Untouched sections keep their defaults
        assert_eq!(settings.audio.sample_rate, 16_000);
    }
}

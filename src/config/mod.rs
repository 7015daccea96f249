//! Configuration management for the portal client
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Portal API configuration
    pub api: ApiConfig,

    /// Session (token storage) configuration
    pub session: SessionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Listing and display configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// Portal API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// File holding the bearer token between runs
    pub token_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

/// Page sizes and language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub news_page_size: u32,
    pub comments_page_size: u32,
    pub topics_page_size: u32,
    pub online_page_size: u32,
    pub vote_log_page_size: u32,
    pub admin_page_size: u32,
    pub top_pvp_limit: u32,

    /// Language for user-facing messages (en, es)
    pub language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            news_page_size: 10,
            comments_page_size: 30,
            topics_page_size: 20,
            online_page_size: 50,
            vote_log_page_size: 20,
            admin_page_size: 20,
            top_pvp_limit: 100,
            language: String::from("en"),
        }
    }
}

/// Default location of the token file: `<config_dir>/fwportal/token`
pub fn default_token_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fwportal")
        .join("token")
}

fn default_user_agent() -> String {
    format!("fwportal/{}", env!("CARGO_PKG_VERSION"))
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("FWPORTAL_API_BASE")
            .unwrap_or_else(|_| String::from("http://localhost:8000"));

        let timeout_secs = std::env::var("FWPORTAL_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(15);

        let user_agent =
            std::env::var("FWPORTAL_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let token_path = std::env::var("FWPORTAL_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_path());

        let log_level =
            std::env::var("FWPORTAL_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let log_format =
            std::env::var("FWPORTAL_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        let defaults = UiConfig::default();
        let ui = UiConfig {
            news_page_size: env_u32("FWPORTAL_NEWS_PAGE_SIZE", defaults.news_page_size),
            comments_page_size: env_u32(
                "FWPORTAL_COMMENTS_PAGE_SIZE",
                defaults.comments_page_size,
            ),
            topics_page_size: env_u32("FWPORTAL_TOPICS_PAGE_SIZE", defaults.topics_page_size),
            online_page_size: env_u32("FWPORTAL_ONLINE_PAGE_SIZE", defaults.online_page_size),
            vote_log_page_size: env_u32(
                "FWPORTAL_VOTE_LOG_PAGE_SIZE",
                defaults.vote_log_page_size,
            ),
            admin_page_size: env_u32("FWPORTAL_ADMIN_PAGE_SIZE", defaults.admin_page_size),
            top_pvp_limit: env_u32("FWPORTAL_TOP_PVP_LIMIT", defaults.top_pvp_limit),
            language: std::env::var("FWPORTAL_LANG").unwrap_or(defaults.language),
        };

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
                user_agent,
            },
            session: SessionConfig { token_path },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
            ui,
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply `FWPORTAL_API_BASE`, `FWPORTAL_TOKEN_PATH` and `FWPORTAL_LANG`
    /// over values read from a file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("FWPORTAL_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Ok(token_path) = std::env::var("FWPORTAL_TOKEN_PATH") {
            self.session.token_path = PathBuf::from(token_path);
        }
        if let Ok(language) = std::env::var("FWPORTAL_LANG") {
            self.ui.language = language;
        }
    }

    /// Load from `path` when given, otherwise from the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let mut config = Self::from_file(path)?;
                config.apply_env_overrides();
                config
            }
            None => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }

        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("api.base_url is not a valid URL: {}", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https");
        }

        if self.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than 0");
        }

        let ui = &self.ui;
        if [
            ui.news_page_size,
            ui.comments_page_size,
            ui.topics_page_size,
            ui.online_page_size,
            ui.vote_log_page_size,
            ui.admin_page_size,
            ui.top_pvp_limit,
        ]
        .contains(&0)
        {
            anyhow::bail!("page sizes and limits must be greater than 0");
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Config pointing at `base_url` with default timeout and user agent
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            timeout_secs: 15,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig {
                token_path: default_token_path(),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://portal.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = Config::default();
        config.ui.topics_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.api.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    #[serial]
    fn test_from_file_without_ui_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fwportal.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://portal.example/api"
timeout_secs = 5
user_agent = "test"

[session]
token_path = "/tmp/fwportal-token"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "https://portal.example/api");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.ui.news_page_size, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("FWPORTAL_API_BASE", "https://wow.example/api");
        std::env::set_var("FWPORTAL_TOPICS_PAGE_SIZE", "40");
        let config = Config::from_env().unwrap();
        std::env::remove_var("FWPORTAL_API_BASE");
        std::env::remove_var("FWPORTAL_TOPICS_PAGE_SIZE");

        assert_eq!(config.api.base_url, "https://wow.example/api");
        assert_eq!(config.ui.topics_page_size, 40);
        assert_eq!(config.ui.news_page_size, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_covers_every_ui_size() {
        let vars = [
            ("FWPORTAL_COMMENTS_PAGE_SIZE", "11"),
            ("FWPORTAL_VOTE_LOG_PAGE_SIZE", "12"),
            ("FWPORTAL_ADMIN_PAGE_SIZE", "13"),
            ("FWPORTAL_TOP_PVP_LIMIT", "14"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let config = Config::from_env().unwrap();
        for (key, _) in vars {
            std::env::remove_var(key);
        }

        assert_eq!(config.ui.comments_page_size, 11);
        assert_eq!(config.ui.vote_log_page_size, 12);
        assert_eq!(config.ui.admin_page_size, 13);
        assert_eq!(config.ui.top_pvp_limit, 14);
    }

    #[test]
    #[serial]
    fn test_env_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fwportal.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://portal.example/api"
timeout_secs = 5
user_agent = "test"

[session]
token_path = "/tmp/fwportal-token"

[logging]
level = "info"
format = "text"

[ui]
language = "en"
"#,
        )
        .unwrap();

        std::env::set_var("FWPORTAL_LANG", "es");
        std::env::set_var("FWPORTAL_API_BASE", "https://other.example/api");
        let config = Config::load(Some(&path));
        std::env::remove_var("FWPORTAL_LANG");
        std::env::remove_var("FWPORTAL_API_BASE");

        let config = config.unwrap();
        assert_eq!(config.ui.language, "es");
        assert_eq!(config.api.base_url, "https://other.example/api");
        assert_eq!(config.session.token_path, PathBuf::from("/tmp/fwportal-token"));
        assert_eq!(config.api.timeout_secs, 5);
    }
}

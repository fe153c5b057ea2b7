//! Console configuration, embedded at build time.
//!
//! ```toml
//! [api]
//! port = 3000          # backend port on the page's host
//! base_url = ""        # absolute base URL, overrides `port` when set
//!
//! [lists]
//! page_size = 20
//!
//! [logging]
//! level = "info"
//! ```

use std::sync::OnceLock;

use contracts::shared::list::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
    pub base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(source)?;
        config.api.base_url = config
            .api
            .base_url
            .take()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        config.lists.page_size = config.lists.page_size.max(1);
        config.logging.level()?;
        Ok(config)
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration; falls back to defaults if the embedded file is invalid.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        AppConfig::parse(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::error!("{}; using defaults", e);
            AppConfig::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.lists.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::parse("[lists]\npage_size = 50\n").unwrap();
        assert_eq!(config.lists.page_size, 50);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.logging.level().unwrap(), log::Level::Info);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = AppConfig::parse("[api]\nbase_url = \"https://erp.example.com/ \"\n").unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://erp.example.com"));

        let blank = AppConfig::parse("[api]\nbase_url = \"\"\n").unwrap();
        assert_eq!(blank.api.base_url, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            AppConfig::parse("[logging]\nlevel = \"loud\"\n"),
            Err(ConfigError::LogLevel(_))
        ));
        assert!(matches!(AppConfig::parse("[api]\nport = \"x\"\n"), Err(ConfigError::Parse(_))));
    }
}

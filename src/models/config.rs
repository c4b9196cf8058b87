//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Post source (upstream social-media API) settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Sentiment analyzer service settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Local persistence settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Listing output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.source.host.trim().is_empty() {
            return Err(AppError::validation("source.host is empty"));
        }
        if self.source.api_base.trim().is_empty() {
            return Err(AppError::validation("source.api_base is empty"));
        }
        if self.analyzer.endpoint.trim().is_empty() {
            return Err(AppError::validation("analyzer.endpoint is empty"));
        }
        if self.storage.root_dir.trim().is_empty() {
            return Err(AppError::validation("storage.root_dir is empty"));
        }
        if self.storage.recent_limit == 0 {
            return Err(AppError::validation("storage.recent_limit must be > 0"));
        }
        if self.output.list_template.trim().is_empty() {
            return Err(AppError::validation("output.list_template is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings shared by both upstream clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Post source settings: which host to accept URLs from and where to fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Hostname a submitted post URL must carry
    #[serde(default = "defaults::source_host")]
    pub host: String,

    /// Base URL of the post lookup API
    #[serde(default = "defaults::source_api_base")]
    pub api_base: String,

    /// Environment variable holding the bearer token
    #[serde(default = "defaults::source_token_env")]
    pub token_env: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: defaults::source_host(),
            api_base: defaults::source_api_base(),
            token_env: defaults::source_token_env(),
        }
    }
}

/// Sentiment analyzer service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Base URL of the sentiment analysis API
    #[serde(default = "defaults::analyzer_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "defaults::analyzer_key_env")]
    pub api_key_env: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::analyzer_endpoint(),
            api_key_env: defaults::analyzer_key_env(),
        }
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding posts.json
    #[serde(default = "defaults::root_dir")]
    pub root_dir: String,

    /// Default number of records shown by the listing
    #[serde(default = "defaults::recent_limit")]
    pub recent_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_dir: defaults::root_dir(),
            recent_limit: defaults::recent_limit(),
        }
    }
}

/// Listing output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Placeholder template for each listed post
    #[serde(default = "defaults::list_template")]
    pub list_template: String,

    /// Whether listing output goes to the console
    #[serde(default = "defaults::console_enabled")]
    pub console_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            list_template: defaults::list_template(),
            console_enabled: defaults::console_enabled(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level printed by the console logger
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; moodring/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Source defaults
    pub fn source_host() -> String {
        "twitter.com".into()
    }
    pub fn source_api_base() -> String {
        "https://api.twitter.com/2".into()
    }
    pub fn source_token_env() -> String {
        "MOODRING_SOURCE_TOKEN".into()
    }

    // Analyzer defaults
    pub fn analyzer_endpoint() -> String {
        "https://language.googleapis.com".into()
    }
    pub fn analyzer_key_env() -> String {
        "MOODRING_ANALYZER_KEY".into()
    }

    // Storage defaults
    pub fn root_dir() -> String {
        "storage".into()
    }
    pub fn recent_limit() -> usize {
        20
    }

    // Output defaults
    pub fn list_template() -> String {
        "[{sentiment}] {date} {text} ({url})".into()
    }
    pub fn console_enabled() -> bool {
        true
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_recent_limit() {
        let mut config = Config::default();
        config.storage.recent_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let mut config = Config::default();
        config.source.host = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [source]
            host = "example.social"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.host, "example.social");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.storage.recent_limit, 20);
    }
}

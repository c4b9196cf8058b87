// src/error.rs

//! Unified error handling for the application.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Post URL rejected (wrong host or path shape)
    #[error("Invalid post URL '{url}': {message}")]
    InvalidPostUrl { url: String, message: String },

    /// Upstream post fetch failed
    #[error("Fetch error for {context}: {message}")]
    Fetch { context: String, message: String },

    /// Sentiment analyzer call failed
    #[error("Analyzer error: {0}")]
    Analyzer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an invalid-post-URL error.
    pub fn invalid_post_url(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::InvalidPostUrl {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a fetch error with context.
    pub fn fetch(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create an analyzer error.
    pub fn analyzer(message: impl Into<String>) -> Self {
        Self::Analyzer(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

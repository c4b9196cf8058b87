// src/config.rs

//! Configuration loading utilities.
//!
//! Secrets never live in the config file. The file names the environment
//! variables to read, and the resolved credentials are injected into the
//! clients at construction time.

use std::env;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::services::{AnalyzerCredentials, SourceCredentials};

/// Read a required environment variable named by the config.
fn require_env(var: &str) -> Result<String> {
    env::var(var).map_err(|_| {
        AppError::config(format!("Environment variable {} is not set", var))
    })
}

/// Resolve post-source credentials from the environment.
pub fn load_source_credentials(config: &Config) -> Result<SourceCredentials> {
    Ok(SourceCredentials {
        bearer_token: require_env(&config.source.token_env)?,
    })
}

/// Resolve analyzer credentials from the environment.
pub fn load_analyzer_credentials(config: &Config) -> Result<AnalyzerCredentials> {
    Ok(AnalyzerCredentials {
        api_key: require_env(&config.analyzer.api_key_env)?,
    })
}

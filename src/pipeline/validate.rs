// src/pipeline/validate.rs

use std::path::Path;

use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Validate the configuration file and report its key values.
pub fn run_validate(config_path: &Path) -> Result<()> {
    log::header("Validating configuration");

    let config = Config::load(config_path)?;
    config.validate()?;

    log::success("Configuration is valid");
    log::sub_item(&format!("source host: {}", config.source.host));
    log::sub_item(&format!("source api: {}", config.source.api_base));
    log::sub_item(&format!("analyzer endpoint: {}", config.analyzer.endpoint));
    log::sub_item(&format!("storage dir: {}", config.storage.root_dir));
    log::sub_item(&format!("timeout: {}s", config.http.timeout_secs));
    log::sub_item(&format!("recent limit: {}", config.storage.recent_limit));

    Ok(())
}

// src/pipeline/list.rs

//! Listing pipeline: render previously analyzed posts.

use crate::error::Result;
use crate::models::{Config, PostView};
use crate::storage::PostStorage;
use crate::utils::log;

/// Load the most recent analyses and render them with the configured
/// template. Labels are recomputed from the stored raw pairs on every call.
pub async fn run_list(
    config: &Config,
    storage: &dyn PostStorage,
    limit: usize,
) -> Result<Vec<PostView>> {
    let records = storage.load_recent(limit).await?;
    let views: Vec<PostView> = records.into_iter().map(PostView::from).collect();

    if config.output.console_enabled {
        log::success(&format!("{} analyzed post(s)", views.len()));
        for view in &views {
            log::sub_item(&view.format(&config.output.list_template));
        }
    }

    Ok(views)
}

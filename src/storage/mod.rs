//! Storage abstractions for analyzed-post persistence.
//!
//! Records hold only the raw analyzer output; sentiment labels are derived
//! on read and never written. The local backend keeps a single JSON file:
//!
//! ```text
//! {root}/
//! └── posts.json            # All analyzed posts, newest first
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::PostRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Envelope for posts.json with bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    /// ISO 8601 timestamp of last update
    pub updated_at: DateTime<Utc>,
    /// Total record count
    pub count: usize,
    /// The records, newest first
    pub posts: Vec<PostRecord>,
}

impl RecordSet {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: posts.len(),
            posts,
        }
    }
}

/// Trait for analyzed-post storage backends.
#[async_trait]
pub trait PostStorage: Send + Sync {
    /// Durably record a new analysis.
    ///
    /// Each call appends a record; re-analyzing the same post produces a
    /// second record rather than an update.
    async fn insert(&self, record: &PostRecord) -> Result<()>;

    /// Load the most recent records, ordered by analysis time descending.
    async fn load_recent(&self, limit: usize) -> Result<Vec<PostRecord>>;
}

//! Local filesystem storage implementation.
//!
//! Keeps all analyzed posts in a single `posts.json` under the configured
//! root directory. Writes are atomic (temp file + rename) so a crashed run
//! never leaves a half-written file behind.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::PostRecord;
use crate::storage::{PostStorage, RecordSet};

const POSTS_FILE: &str = "posts.json";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load all records, newest first. Missing file reads as empty.
    async fn load_all(&self) -> Result<Vec<PostRecord>> {
        match self.read_json::<RecordSet>(POSTS_FILE).await? {
            Some(data) => Ok(data.posts),
            None => {
                log::debug!("No {} found, starting empty", POSTS_FILE);
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl PostStorage for LocalStorage {
    async fn insert(&self, record: &PostRecord) -> Result<()> {
        let mut posts = self.load_all().await?;
        posts.push(record.clone());

        // Newest first; stable sort keeps insertion order for equal stamps.
        posts.sort_by(|a, b| b.analyzed_at.cmp(&a.analyzed_at));

        let data = RecordSet::new(posts);
        self.write_json(POSTS_FILE, &data).await?;
        log::info!("Recorded post {} ({} total)", record.post_id, data.count);
        Ok(())
    }

    async fn load_recent(&self, limit: usize) -> Result<Vec<PostRecord>> {
        let mut posts = self.load_all().await?;
        posts.sort_by(|a, b| b.analyzed_at.cmp(&a.analyzed_at));
        posts.truncate(limit);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn record(post_id: u64, day: u32, score: f64) -> PostRecord {
        PostRecord {
            post_id,
            text: format!("post {post_id}"),
            url: format!("https://twitter.com/u/status/{post_id}"),
            analyzed_at: Utc.with_ymd_and_hms(2026, 2, day, 9, 0, 0).unwrap(),
            score,
            magnitude: 0.5,
        }
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_bytes("test.txt", b"hello").await.unwrap();
        let data = storage.read_bytes("test.txt").await.unwrap();
        assert_eq!(data, Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let data = storage.read_bytes("nope.txt").await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_load_recent_on_empty_store() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let posts = storage.load_recent(10).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_insert_and_load_recent_orders_descending() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.insert(&record(1, 1, 0.1)).await.unwrap();
        storage.insert(&record(2, 3, -0.6)).await.unwrap();
        storage.insert(&record(3, 2, 0.9)).await.unwrap();

        let posts = storage.load_recent(10).await.unwrap();
        let ids: Vec<u64> = posts.iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_load_recent_respects_limit() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        for day in 1..=5 {
            storage.insert(&record(day as u64, day, 0.0)).await.unwrap();
        }

        let posts = storage.load_recent(2).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].post_id, 5);
        assert_eq!(posts[1].post_id, 4);
    }

    #[tokio::test]
    async fn test_reanalysis_appends_a_second_record() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.insert(&record(7, 1, 0.2)).await.unwrap();
        storage.insert(&record(7, 2, 0.3)).await.unwrap();

        let posts = storage.load_recent(10).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].score, 0.3);
    }

    #[tokio::test]
    async fn test_envelope_fields_are_maintained() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.insert(&record(1, 1, 0.1)).await.unwrap();
        storage.insert(&record(2, 2, 0.2)).await.unwrap();

        let data: RecordSet = storage.read_json(POSTS_FILE).await.unwrap().unwrap();
        assert_eq!(data.count, 2);
        assert_eq!(data.posts.len(), 2);
    }
}

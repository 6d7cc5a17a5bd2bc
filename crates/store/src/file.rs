//! File-based store — a single JSON document on disk.
//!
//! The whole map is loaded into memory at construction and flushed on every
//! mutation. Daily outfit caching writes a handful of small entries a day,
//! so whole-file rewrites are fine here.
//!
//! Storage location: `~/.stylecast/cache.json` by default.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use stylecast_core::error::StoreError;
use stylecast_core::store::KeyValueStore;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A file-backed store: one JSON object, keys to string values.
pub struct FileStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStore {
    /// Create a new file store at the given path.
    ///
    /// If the file exists, entries are loaded from it. A corrupt or missing
    /// file starts empty — cache contents are regenerable.
    pub fn new(path: PathBuf) -> Self {
        let entries = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = entries.len(), "File store loaded");
        Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    fn load_from_disk(path: &PathBuf) -> HashMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return HashMap::new(), // File doesn't exist yet — start empty
        };

        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt store file");
                HashMap::new()
            }
        }
    }

    /// Flush the whole map to disk.
    async fn flush(&self) -> Result<(), StoreError> {
        let entries = self.entries.read().await;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create store directory: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(&*entries)
            .map_err(|e| StoreError::Storage(format!("Failed to serialize store: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| StoreError::Storage(format!("Failed to write store file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        self.flush().await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = self.entries.write().await.remove(key).is_some();
        if removed {
            self.flush().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn set_persists_across_instances() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp); // Close file so the store can own it

        let store = FileStore::new(path.clone());
        store.set("daily_outfit:2026-08-06", "{}".into()).await.unwrap();

        let store2 = FileStore::new(path);
        assert_eq!(
            store2.get("daily_outfit:2026-08-06").await.unwrap(),
            Some("{}".to_string())
        );
    }

    #[tokio::test]
    async fn remove_persists() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp);

        let store = FileStore::new(path.clone());
        store.set("k", "v".into()).await.unwrap();
        store.remove("k").await.unwrap();

        let store2 = FileStore::new(path);
        assert_eq!(store2.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let path = PathBuf::from("/tmp/stylecast_test_nonexistent_store.json");
        let _ = std::fs::remove_file(&path);
        let store = FileStore::new(path);
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "this is not json").unwrap();
        let path = tmp.path().to_path_buf();

        let store = FileStore::new(path);
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn removing_missing_key_does_not_rewrite() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp);

        let store = FileStore::new(path.clone());
        store.remove("never-set").await.unwrap();
        // No write happened, so the file still doesn't exist.
        assert!(!path.exists());
    }
}

//! Key-value store trait — the persistence seam under the daily cache.
//!
//! The cache never talks to storage directly; it goes through this trait so
//! the orchestrator stays storage-agnostic and tests can inject an in-memory
//! store. Values are opaque JSON strings; the cache owns (de)serialization.

use async_trait::async_trait;

use crate::error::StoreError;

/// A minimal async string-keyed store.
///
/// Implementations: in-memory (tests, ephemeral sessions), JSON file
/// (single-device persistence).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The backend name (e.g., "in_memory", "file").
    fn name(&self) -> &str;

    /// Read the value under `key`, if any.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: String) -> std::result::Result<(), StoreError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> std::result::Result<(), StoreError>;
}

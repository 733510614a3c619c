//! Key-value store trait for client-local state.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for the two client-local stores the console keeps: a durable one
/// (survives restarts, holds the replay record) and a session-scoped one
/// (holds navigation state cleared on logout).
///
/// Values are opaque strings; callers serialize to JSON themselves.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short provider name for logging (`"file"`, `"memory"`).
    fn provider_type(&self) -> &str;

    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous value under the same key.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists.
    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Remove every key.
    async fn clear(&self) -> AppResult<()>;
}

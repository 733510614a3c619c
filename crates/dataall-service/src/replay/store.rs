//! Single-slot durable storage of the replay record.

use std::sync::Arc;

use tracing::{debug, warn};

use dataall_core::result::AppResult;
use dataall_core::traits::KeyValueStore;

use super::record::RequestInfo;

/// Reads and writes the one pending [`RequestInfo`].
#[derive(Debug, Clone)]
pub struct RequestInfoStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl RequestInfoStore {
    /// Create the slot under `key` in a durable store.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Durable key of the slot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist a record, overwriting any previous one.
    pub async fn store_request_info(&self, info: &RequestInfo) -> AppResult<()> {
        let raw = serde_json::to_string(info)?;
        self.store.set(&self.key, &raw).await?;
        debug!(
            operation = %info.operation_name(),
            username = %info.username,
            "Stored request for re-auth replay"
        );
        Ok(())
    }

    /// Read the pending record. Never fails: a read or parse error is
    /// logged and reported as no record.
    pub async fn restore_retry_request(&self) -> Option<RequestInfo> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read pending replay record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable replay record");
                None
            }
        }
    }

    /// Whether anything (readable or not) occupies the slot.
    pub async fn is_occupied(&self) -> bool {
        self.store.exists(&self.key).await.unwrap_or(false)
    }

    /// Empty the slot.
    pub async fn clear_request_info(&self) -> AppResult<()> {
        self.store.remove(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataall_graphql::request::GraphqlRequest;
    use dataall_storage::memory::MemoryStore;

    fn slot() -> (RequestInfoStore, MemoryStore) {
        let backing = MemoryStore::new();
        (
            RequestInfoStore::new(Arc::new(backing.clone()), "requestInfo"),
            backing,
        )
    }

    fn info(op: &str) -> RequestInfo {
        RequestInfo::capture(
            GraphqlRequest::new(op, format!("mutation {op} {{ {op} }}")),
            "/console/shares",
            "alice",
        )
    }

    #[tokio::test]
    async fn test_single_slot_overwrite() {
        let (slot, backing) = slot();
        slot.store_request_info(&info("submitShareObject")).await.unwrap();
        slot.store_request_info(&info("approveShareObject")).await.unwrap();

        assert_eq!(backing.len(), 1);
        let restored = slot.restore_retry_request().await.unwrap();
        assert_eq!(restored.operation_name(), "approveShareObject");
    }

    #[tokio::test]
    async fn test_unreadable_record_restores_none() {
        let (slot, backing) = slot();
        backing.set("requestInfo", "{not json").await.unwrap();
        assert!(slot.restore_retry_request().await.is_none());
        assert!(slot.is_occupied().await);

        backing.set("requestInfo", "{\"pathname\": \"/\"}").await.unwrap();
        assert!(slot.restore_retry_request().await.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let (slot, _) = slot();
        slot.store_request_info(&info("deleteShareObject")).await.unwrap();
        slot.clear_request_info().await.unwrap();
        assert!(slot.restore_retry_request().await.is_none());
        assert!(!slot.is_occupied().await);
    }
}

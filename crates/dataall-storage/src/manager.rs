//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use dataall_core::config::StorageConfig;
use dataall_core::error::AppError;
use dataall_core::result::AppResult;
use dataall_core::traits::KeyValueStore;

/// Wraps the configured durable store.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create the durable store named by `config.provider`.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(directory = %config.directory, "Initializing file store");
                Arc::new(crate::file::FileStore::new(&config.directory).await?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Supported: file, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// The inner store as a shareable handle.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataall_core::ErrorKind;

    #[tokio::test]
    async fn test_selects_provider() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorageConfig {
            directory: dir.path().display().to_string(),
            ..StorageConfig::default()
        };
        let manager = StoreManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "file");

        config.provider = "memory".to_string();
        let manager = StoreManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "memory");

        config.provider = "redis".to_string();
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}

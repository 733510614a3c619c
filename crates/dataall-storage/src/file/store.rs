//! Durable key-value store, one file per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use dataall_core::error::{AppError, ErrorKind};
use dataall_core::result::AppResult;
use dataall_core::traits::KeyValueStore;

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Durable store rooted at a directory.
///
/// Writes go to a uniquely named temporary file that is then renamed over
/// the target, so a reader sees either the previous value or the new one.
/// Concurrent writers to the same key are last-write-wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create the store, creating the root directory if needed.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create store directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to its file. Keys are flat names; separators and relative
    /// components are refused.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.starts_with('.')
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(AppError::validation(format!("Invalid storage key: '{key}'")));
        }
        Ok(self.root.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn provider_type(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read key: {key}"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        let temp = self
            .root
            .join(format!(".{key}.{}.{TEMP_EXTENSION}", uuid::Uuid::new_v4()));

        fs::write(&temp, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write key: {key}"),
                e,
            )
        })?;

        if let Err(e) = fs::rename(&temp, &path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to commit key: {key}"),
                e,
            ));
        }

        debug!(key, bytes = value.len(), "Wrote key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "Removed key");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove key: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let path = self.resolve(key)?;
        fs::try_exists(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to stat key: {key}"),
                e,
            )
        })
    }

    async fn clear(&self) -> AppResult<()> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list store directory: {}", self.root.display()),
                e,
            )
        })?;

        let mut count = 0u64;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let ours = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == VALUE_EXTENSION || ext == TEMP_EXTENSION);
            if ours && entry.file_type().await?.is_file() {
                fs::remove_file(&path).await?;
                count += 1;
            }
        }

        debug!(root = %self.root.display(), count, "Cleared file store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).await.unwrap();

        assert!(store.get("requestInfo").await.unwrap().is_none());
        store.set("requestInfo", "{\"a\":1}").await.unwrap();
        store.set("requestInfo", "{\"a\":2}").await.unwrap();
        assert_eq!(
            store.get("requestInfo").await.unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert!(store.exists("requestInfo").await.unwrap());
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path()).await.unwrap();
            store.set("requestInfo", "kept").await.unwrap();
        }
        let reopened = FileStore::new(dir.path()).await.unwrap();
        assert_eq!(
            reopened.get("requestInfo").await.unwrap().as_deref(),
            Some("kept")
        );
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).await.unwrap();
        store.set("requestInfo", "x").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["requestInfo.json".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested")).await.unwrap();
        store.remove("missing").await.unwrap();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.remove("a").await.unwrap();
        assert!(!store.exists("a").await.unwrap());

        store.clear().await.unwrap();
        assert!(store.get("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).await.unwrap();
        for key in ["", "..", "../escape", "a/b", ".hidden"] {
            let err = store.set(key, "x").await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "{key}");
        }
    }
}

//! File-based Local Storage Adapter
//!
//! Stores each key as `<key>.json` inside a data directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, LocalStorage, LocalStorageError};

/// File-based key/value storage
#[derive(Debug, Clone)]
pub struct FileLocalStorage {
    base_path: PathBuf,
}

impl FileLocalStorage {
    /// Create a new file storage rooted at a data directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileLocalStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path backing a key
    fn item_path(&self, key: &str) -> Result<PathBuf, LocalStorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    async fn ensure_dir(&self) -> Result<(), LocalStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| LocalStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, LocalStorageError> {
        let file_path = self.item_path(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LocalStorageError::IoError(e.to_string())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStorageError> {
        let file_path = self.item_path(key)?;
        self.ensure_dir().await?;

        // Write beside the target, then rename over it
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| LocalStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| LocalStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), LocalStorageError> {
        let file_path = self.item_path(key)?;

        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LocalStorageError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: &str = "softSellChatHistory";

    #[tokio::test]
    async fn test_file_storage_set_and_get_item() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        storage.set_item(KEY, r#"[{"sender":"bot","text":"hi"}]"#).await.unwrap();

        let loaded = storage.get_item(KEY).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"sender":"bot","text":"hi"}]"#));
        assert!(temp_dir.path().join("softSellChatHistory.json").exists());
    }

    #[tokio::test]
    async fn test_file_storage_get_missing_item() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        assert_eq!(storage.get_item(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let storage = FileLocalStorage::new(&nested);

        storage.set_item(KEY, "[]").await.unwrap();

        assert!(nested.join("softSellChatHistory.json").exists());
    }

    #[tokio::test]
    async fn test_file_storage_overwrites_item() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        storage.set_item(KEY, "first").await.unwrap();
        storage.set_item(KEY, "second").await.unwrap();

        assert_eq!(storage.get_item(KEY).await.unwrap().as_deref(), Some("second"));
        assert!(!temp_dir.path().join("softSellChatHistory.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_storage_remove_item() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        storage.set_item(KEY, "[]").await.unwrap();
        storage.remove_item(KEY).await.unwrap();

        assert_eq!(storage.get_item(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_remove_missing_item_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        assert!(storage.remove_item(KEY).await.is_ok());
    }

    #[tokio::test]
    async fn test_file_storage_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path());

        let result = storage.set_item("../escape", "x").await;
        assert!(matches!(result, Err(LocalStorageError::InvalidKey(_))));
    }
}

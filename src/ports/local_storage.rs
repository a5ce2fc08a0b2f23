//! Local Storage Port - Interface for the browser-style key/value store.
//!
//! The chat transcript is persisted as a single string value under a fixed
//! key. Adapters decide where that value physically lives.

use async_trait::async_trait;

/// Errors that can occur during local storage operations
#[derive(Debug, thiserror::Error)]
pub enum LocalStorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for a string key/value store with `localStorage` semantics
#[async_trait]
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    ///
    /// # Errors
    /// Returns `LocalStorageError` if the store cannot be read
    async fn get_item(&self, key: &str) -> Result<Option<String>, LocalStorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `LocalStorageError` if the write fails
    async fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStorageError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns `LocalStorageError` if the removal fails
    async fn remove_item(&self, key: &str) -> Result<(), LocalStorageError>;
}

/// Checks that a key is non-empty and safe to use as a file stem.
pub fn validate_key(key: &str) -> Result<(), LocalStorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(LocalStorageError::InvalidKey(key.to_string()))
    }
}

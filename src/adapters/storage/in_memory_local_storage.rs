//! In-Memory Local Storage Adapter
//!
//! Keeps values in a shared map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{LocalStorage, LocalStorageError};

/// In-memory key/value storage
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryLocalStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds one value
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self {
            items: Arc::new(RwLock::new(items)),
            ..Self::default()
        }
    }

    /// Number of successful `set_item` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent writes and removals fail (useful for tests)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of stored items
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }

    fn check_writable(&self) -> Result<(), LocalStorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(LocalStorageError::Unavailable("writes disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LocalStorage for InMemoryLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, LocalStorageError> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStorageError> {
        self.check_writable()?;
        let mut items = self.items.write().await;
        items.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), LocalStorageError> {
        self.check_writable()?;
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}

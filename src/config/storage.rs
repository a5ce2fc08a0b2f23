//! Transcript storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::HISTORY_KEY;
use crate::ports::validate_key;

/// Where the transcript is kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `data_dir`
    #[default]
    File,
    /// Process memory; history is lost on exit
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the transcript is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_key(&self.key).map_err(|_| ValidationError::InvalidStorageKey(self.key.clone()))?;
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_key() -> String {
    HISTORY_KEY.to_string()
}

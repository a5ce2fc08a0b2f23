//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Typing speed must be at least one character per second")]
    InvalidTypingSpeed,

    #[error("Base typing delay exceeds the maximum delay")]
    BaseDelayExceedsMax,

    #[error("Delay too long: {field} must be at most {max_ms} ms")]
    DelayTooLong { field: &'static str, max_ms: u64 },

    #[error("Invalid storage key: {0:?}")]
    InvalidStorageKey(String),

    #[error("Storage data directory must not be empty")]
    EmptyDataDir,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}

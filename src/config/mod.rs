//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SOFTSELL_CHAT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use softsell_chat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("History stored under {}", config.storage.key);
//! ```

mod error;
mod features;
mod logging;
mod schedule;
mod storage;
mod typing;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::LoggingConfig;
pub use schedule::ScheduleConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use typing::{TypingConfig, MAX_CONFIGURED_DELAY_MS};

use serde::Deserialize;

use crate::application::{ReplyTiming, SessionOptions};

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated typing delay
    #[serde(default)]
    pub typing: TypingConfig,

    /// Deferred side effect delays
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Transcript storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOFTSELL_CHAT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SOFTSELL_CHAT__TYPING__MAX_DELAY_MS=1500` -> `typing.max_delay_ms = 1500`
    /// - `SOFTSELL_CHAT__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOFTSELL_CHAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.typing.validate()?;
        self.schedule.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Reply timing derived from the typing and schedule sections
    pub fn reply_timing(&self) -> ReplyTiming {
        ReplyTiming {
            typing: self.typing.to_delay(),
            simulate_typing: self.features.typing_delay,
            lead_form_delay: self.schedule.lead_form_delay(),
            reset_delay: self.schedule.reset_delay(),
        }
    }

    /// Options for building a chat session
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            storage_key: self.storage.key.clone(),
            timing: self.reply_timing(),
            example_questions: self.features.example_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "SOFTSELL_CHAT__TYPING__MAX_DELAY_MS",
        "SOFTSELL_CHAT__STORAGE__BACKEND",
        "SOFTSELL_CHAT__FEATURES__TYPING_DELAY",
        "SOFTSELL_CHAT__SCHEDULE__RESET_DELAY_MS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.typing, TypingConfig::default());
        assert_eq!(config.storage.key, "softSellChatHistory");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SOFTSELL_CHAT__TYPING__MAX_DELAY_MS", "1500");
        env::set_var("SOFTSELL_CHAT__STORAGE__BACKEND", "memory");
        env::set_var("SOFTSELL_CHAT__FEATURES__TYPING_DELAY", "false");
        env::set_var("SOFTSELL_CHAT__SCHEDULE__RESET_DELAY_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.typing.max_delay_ms, 1500);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(!config.features.typing_delay);
        assert_eq!(config.schedule.reset_delay_ms, 250);
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let mut config = AppConfig::default();
        config.typing.chars_per_second = 0;
        config.storage.key = String::new();

        assert_eq!(config.validate(), Err(ValidationError::InvalidTypingSpeed));
    }

    #[test]
    fn test_session_options_follow_config() {
        let mut config = AppConfig::default();
        config.features.typing_delay = false;
        config.features.example_questions = false;
        config.schedule.lead_form_delay_ms = 10;

        let options = config.session_options();

        assert!(!options.timing.simulate_typing);
        assert!(!options.example_questions);
        assert_eq!(options.timing.lead_form_delay, Duration::from_millis(10));
        assert_eq!(options.storage_key, "softSellChatHistory");
    }
}

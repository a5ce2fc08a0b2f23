//! Simulated typing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::conversation::TypingDelay;

/// Upper bound accepted for any configured delay
pub const MAX_CONFIGURED_DELAY_MS: u64 = 60_000;

/// Typing delay configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TypingConfig {
    /// Delay applied to every reply
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Simulated typing speed
    #[serde(default = "default_chars_per_second")]
    pub chars_per_second: u32,

    /// Cap on the total delay
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl TypingConfig {
    pub fn to_delay(&self) -> TypingDelay {
        TypingDelay::new(
            Duration::from_millis(self.base_delay_ms),
            self.chars_per_second,
            Duration::from_millis(self.max_delay_ms),
        )
    }

    /// Validate typing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chars_per_second == 0 {
            return Err(ValidationError::InvalidTypingSpeed);
        }
        if self.base_delay_ms > self.max_delay_ms {
            return Err(ValidationError::BaseDelayExceedsMax);
        }
        if self.max_delay_ms > MAX_CONFIGURED_DELAY_MS {
            return Err(ValidationError::DelayTooLong {
                field: "typing.max_delay_ms",
                max_ms: MAX_CONFIGURED_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay_ms(),
            chars_per_second: default_chars_per_second(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_base_delay_ms() -> u64 {
    500
}

fn default_chars_per_second() -> u32 {
    20
}

fn default_max_delay_ms() -> u64 {
    3000
}

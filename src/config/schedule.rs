//! Deferred side effect configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::typing::MAX_CONFIGURED_DELAY_MS;

/// Delays before deferred side effects run
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Pause between a routing reply and the lead form opening
    #[serde(default = "default_lead_form_delay_ms")]
    pub lead_form_delay_ms: u64,

    /// Pause between a reset request and the conversation clearing
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl ScheduleConfig {
    pub fn lead_form_delay(&self) -> Duration {
        Duration::from_millis(self.lead_form_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("schedule.lead_form_delay_ms", self.lead_form_delay_ms),
            ("schedule.reset_delay_ms", self.reset_delay_ms),
        ] {
            if value > MAX_CONFIGURED_DELAY_MS {
                return Err(ValidationError::DelayTooLong {
                    field,
                    max_ms: MAX_CONFIGURED_DELAY_MS,
                });
            }
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            lead_form_delay_ms: default_lead_form_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

fn default_lead_form_delay_ms() -> u64 {
    1000
}

fn default_reset_delay_ms() -> u64 {
    500
}

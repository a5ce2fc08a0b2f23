//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Delay replies to simulate typing
    #[serde(default = "default_enabled")]
    pub typing_delay: bool,

    /// Offer example questions at the start of a conversation
    #[serde(default = "default_enabled")]
    pub example_questions: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            typing_delay: true,
            example_questions: true,
        }
    }
}

fn default_enabled() -> bool {
    true
}

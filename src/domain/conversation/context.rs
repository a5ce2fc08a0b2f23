//! Conversation context inferred from the visitor's messages.

use serde::{Deserialize, Serialize};

/// What the visitor appears to want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserIntent {
    Sell,
    Valuation,
    Contact,
    Schedule,
}

impl UserIntent {
    /// Stage the conversation enters when this intent is detected.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Sell => Stage::Inquiry,
            Self::Valuation => Stage::Valuation,
            Self::Contact | Self::Schedule => Stage::Contact,
        }
    }
}

/// Coarse position of the visitor in the sales funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    #[default]
    Initial,
    Inquiry,
    Valuation,
    Contact,
    FollowUp,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Inquiry => "inquiry",
            Self::Valuation => "valuation",
            Self::Contact => "contact",
            Self::FollowUp => "follow-up",
        }
    }
}

/// Accumulated knowledge about the visitor.
///
/// # Invariants
///
/// - `stage` always equals `user_intent.stage()` for the most recent intent,
///   except after a lead submission, which moves it to `FollowUp`.
/// - `license_type` is only ever replaced, never unset, until `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationContext {
    license_type: Option<String>,
    user_intent: Option<UserIntent>,
    stage: Stage,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn license_type(&self) -> Option<&str> {
        self.license_type.as_deref()
    }

    pub fn user_intent(&self) -> Option<UserIntent> {
        self.user_intent
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Records a detected license product.
    pub fn record_license(&mut self, license: impl Into<String>) {
        self.license_type = Some(license.into());
    }

    /// Records a detected intent and moves to its stage.
    pub fn record_intent(&mut self, intent: UserIntent) {
        self.user_intent = Some(intent);
        self.stage = intent.stage();
    }

    /// Marks that the visitor handed over their contact details.
    pub fn mark_follow_up(&mut self) {
        self.stage = Stage::FollowUp;
    }

    /// Returns to the initial, empty context.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

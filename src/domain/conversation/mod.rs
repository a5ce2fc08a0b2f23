//! Conversation domain module.
//!
//! Holds the transcript, the inferred visitor context, and the pure rules
//! that turn an utterance into a context update and a canned reply.

mod catalog;
mod classifier;
mod context;
mod message;
mod quick_actions;
mod responses;
mod transcript;
mod typing;

pub use catalog::LicenseCategory;
pub use classifier::{Detection, IntentClassifier, IntentRule, INTENT_RULES};
pub use context::{ConversationContext, Stage, UserIntent};
pub use message::{Message, Sender};
pub use quick_actions::{
    shows_example_questions, QuickAction, QuickActionScript, EXAMPLE_QUESTIONS,
    EXAMPLE_QUESTION_THRESHOLD,
};
pub use responses::{
    Keywords, Reply, ResponseKind, ResponseRule, ResponseSelector, SideEffect, FALLBACK_REPLY,
    GREETING_REPLY, RESPONSE_RULES,
};
pub use transcript::{Transcript, DEFAULT_GREETING};
pub use typing::TypingDelay;

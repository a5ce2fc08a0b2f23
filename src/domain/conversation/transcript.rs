//! The ordered chat transcript.

use serde::{Deserialize, Serialize};

use super::message::Message;

/// Greeting shown when no earlier conversation exists.
pub const DEFAULT_GREETING: &str =
    "Hi there! 👋 How can I help you with software license reselling today?";

/// Append-only, chronologically ordered list of messages.
///
/// Serializes as a bare JSON array of `{sender, text}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    /// A transcript holding only the default greeting.
    pub fn initial() -> Self {
        Self(vec![Message::bot(DEFAULT_GREETING)])
    }

    /// Rebuilds a transcript from already ordered messages.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    /// Appends a message at the end.
    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    /// Returns true if this is exactly the single default greeting.
    pub fn is_initial(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_bot() && self.0[0].text() == DEFAULT_GREETING
    }

    /// Serializes the whole transcript for storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a stored transcript. Any well-formed payload is accepted as-is.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::initial()
    }
}

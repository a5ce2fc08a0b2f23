//! Message entity for the chat transcript.
//!
//! Messages are immutable records of user/bot exchanges. The serialized
//! shape is exactly `{"sender": "user" | "bot", "text": "..."}`.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The site visitor.
    User,
    /// The SoftSell assistant.
    Bot,
}

impl Sender {
    /// Returns a short label suitable for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "SoftSell Assistant",
        }
    }
}

/// An immutable message within the transcript.
///
/// # Invariants
///
/// - Position in the transcript is the only ordering key; messages carry no id
///   or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Creates a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// Returns the sender.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the raw text, including embedded line breaks.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the visitor wrote this message.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Returns true if the assistant wrote this message.
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Splits the text into the visual lines a renderer should display.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sender {
        use super::*;

        #[test]
        fn serializes_to_lowercase() {
            assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
            assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        }

        #[test]
        fn rejects_unknown_sender() {
            let result: Result<Sender, _> = serde_json::from_str("\"assistant\"");
            assert!(result.is_err());
        }
    }

    mod message {
        use super::*;

        #[test]
        fn user_creates_user_message() {
            let msg = Message::user("Hello");
            assert!(msg.is_user());
            assert!(!msg.is_bot());
            assert_eq!(msg.text(), "Hello");
        }

        #[test]
        fn bot_creates_bot_message() {
            let msg = Message::bot("Hi there");
            assert!(msg.is_bot());
            assert_eq!(msg.sender(), Sender::Bot);
        }

        #[test]
        fn serializes_to_sender_text_shape() {
            let msg = Message::user("Hello");
            let json = serde_json::to_value(&msg).unwrap();
            assert_eq!(json, serde_json::json!({"sender": "user", "text": "Hello"}));
        }

        #[test]
        fn lines_split_on_line_breaks() {
            let msg = Message::bot("First\n\n• Second");
            let lines: Vec<&str> = msg.lines().collect();
            assert_eq!(lines, vec!["First", "", "• Second"]);
        }

        #[test]
        fn lines_of_single_line_text() {
            let msg = Message::bot("Only one");
            assert_eq!(msg.lines().count(), 1);
        }
    }
}

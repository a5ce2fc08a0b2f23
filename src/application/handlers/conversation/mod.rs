//! Conversation command handlers.

mod clear_chat;
mod quick_actions;
mod send_message;

pub use clear_chat::{ClearChatCommand, ClearChatHandler, ClearChatResult};
pub use quick_actions::{
    QuickActionCommand, QuickActionError, QuickActionHandler, QuickActionResult,
};
pub use send_message::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
};

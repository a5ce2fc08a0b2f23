//! Application handlers.
//!
//! Command handlers that orchestrate domain operations against the session.

pub mod conversation;
pub mod lead;

pub use conversation::{
    ClearChatCommand, ClearChatHandler, ClearChatResult, QuickActionCommand, QuickActionError,
    QuickActionHandler, QuickActionResult, SendMessageCommand, SendMessageError,
    SendMessageHandler, SendMessageResult,
};
pub use lead::{
    CancelLeadFormCommand, LeadFormError, LeadFormHandler, OpenLeadFormCommand,
    SubmitLeadFormCommand, SubmitLeadFormResult, UpdateLeadFieldCommand,
};

//! Application layer - Session state, scheduling, and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! [`ChatWidget`] is the entry point the rendering surface talks to.

pub mod handlers;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod widget;

pub use handlers::{
    ClearChatCommand, ClearChatHandler, ClearChatResult, LeadFormError, LeadFormHandler,
    QuickActionCommand, QuickActionError, QuickActionHandler, QuickActionResult,
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
    SubmitLeadFormResult,
};
pub use scheduler::{ScheduledTask, TaskScheduler};
pub use session::{ChatSession, ReplyTiming, SessionOptions, SessionState, WidgetView};
pub use store::{ConversationStore, HISTORY_KEY};
pub use widget::ChatWidget;

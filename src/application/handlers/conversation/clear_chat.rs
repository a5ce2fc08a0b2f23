//! ClearChat command handler.

use std::sync::Arc;

use crate::application::session::ChatSession;

/// Command to reset the conversation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearChatCommand;

/// Result of clearing the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearChatResult {
    pub discarded_messages: usize,
}

/// Handler for clearing the conversation.
#[derive(Clone)]
pub struct ClearChatHandler {
    session: Arc<ChatSession>,
}

impl ClearChatHandler {
    pub fn new(session: Arc<ChatSession>) -> Self {
        Self { session }
    }

    pub async fn handle(&self, _cmd: ClearChatCommand) -> ClearChatResult {
        let discarded_messages = self.session.clear().await;
        ClearChatResult { discarded_messages }
    }
}

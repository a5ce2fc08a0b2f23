//! QuickAction command handler.
//!
//! Scripted actions append a fixed exchange and open the lead form. The other
//! actions send a fixed question through the normal chat path.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::send_message::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
};
use crate::application::session::ChatSession;
use crate::domain::conversation::{Message, QuickAction, QuickActionScript};

/// Command to trigger a quick action.
#[derive(Debug, Clone, Copy)]
pub struct QuickActionCommand {
    pub action: QuickAction,
}

impl QuickActionCommand {
    pub fn new(action: QuickAction) -> Self {
        Self { action }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickActionError {
    #[error(transparent)]
    SendMessage(#[from] SendMessageError),
}

/// Result of a quick action.
#[derive(Debug)]
pub enum QuickActionResult {
    /// A fixed exchange was appended.
    Scripted { lead_form_opened: bool },
    /// A fixed question was sent as a chat message.
    Sent(SendMessageResult),
}

/// Handler for quick actions.
#[derive(Clone)]
pub struct QuickActionHandler {
    session: Arc<ChatSession>,
    send_message: SendMessageHandler,
}

impl QuickActionHandler {
    pub fn new(session: Arc<ChatSession>) -> Self {
        let send_message = SendMessageHandler::new(session.clone());
        Self {
            session,
            send_message,
        }
    }

    pub async fn handle(&self, cmd: QuickActionCommand) -> Result<QuickActionResult, QuickActionError> {
        debug!(action = cmd.action.label(), "Quick action");

        match cmd.action.script() {
            QuickActionScript::Scripted { user, bot } => {
                let mut state = self.session.lock().await;
                state
                    .store
                    .append_messages([Message::user(user), Message::bot(bot)])
                    .await;
                let lead_form_opened = self.session.open_lead_form_locked(&mut state).await;
                self.session.publish(&state);
                Ok(QuickActionResult::Scripted { lead_form_opened })
            }
            QuickActionScript::Ask(question) => {
                let result = self
                    .send_message
                    .handle(SendMessageCommand::new(question))
                    .await?;
                Ok(QuickActionResult::Sent(result))
            }
        }
    }
}

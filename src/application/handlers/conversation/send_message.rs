//! SendMessage command handler.
//!
//! Records the visitor's message, updates the conversation context, selects
//! the reply and schedules its delivery after the simulated typing delay.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::application::scheduler::ScheduledTask;
use crate::application::session::ChatSession;
use crate::domain::conversation::{ConversationContext, Message, Reply, Sender};

/// Command to send a chat message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// The message content, stored as typed.
    pub content: String,
}

impl SendMessageCommand {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// The lead form is collecting contact details.
    #[error("Chat input is disabled while the lead form is open")]
    LeadFormOpen,
}

/// Result of sending a message.
#[derive(Debug)]
pub struct SendMessageResult {
    /// The message that was appended.
    pub user_message: Message,
    /// Context after classification.
    pub context: ConversationContext,
    /// Reply that will be delivered.
    pub reply: Reply,
    /// Delay before the reply appears.
    pub reply_delay: Duration,
    /// Pending delivery of the reply.
    pub delivery: ScheduledTask,
}

/// Handler for sending chat messages.
#[derive(Clone)]
pub struct SendMessageHandler {
    session: Arc<ChatSession>,
}

impl SendMessageHandler {
    pub fn new(session: Arc<ChatSession>) -> Self {
        Self { session }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, SendMessageError> {
        // 1. Validate
        if cmd.content.trim().is_empty() {
            return Err(SendMessageError::EmptyContent);
        }

        let mut state = self.session.lock().await;
        if !state.gate.accepts_chat() {
            return Err(SendMessageError::LeadFormOpen);
        }

        // 2. Record the visitor's message
        let user_message = Message::user(cmd.content.as_str());
        state
            .store
            .append_message(Sender::User, cmd.content.as_str())
            .await;

        // 3. Classify, then select against the updated context
        let context = self.session.classifier().classify(&cmd.content, &state.context);
        state.context = context.clone();
        let reply = self.session.selector().select(&cmd.content, &context);

        // 4. Show the typing indicator until delivery
        state.pending_replies += 1;
        self.session.publish(&state);
        drop(state);

        let reply_delay = self.session.timing().reply_delay(&reply.text);
        let delivery = self.session.schedule_reply(reply.clone());

        debug!(
            kind = ?reply.kind,
            stage = context.stage().label(),
            delay_ms = reply_delay.as_millis() as u64,
            "Reply scheduled"
        );

        Ok(SendMessageResult {
            user_message,
            context,
            reply,
            reply_delay,
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLocalStorage;
    use crate::application::session::SessionOptions;
    use crate::domain::conversation::{ResponseKind, Stage, UserIntent};

    async fn handler() -> (SendMessageHandler, Arc<ChatSession>) {
        let session =
            ChatSession::load(Arc::new(InMemoryLocalStorage::new()), SessionOptions::default())
                .await;
        (SendMessageHandler::new(session.clone()), session)
    }

    #[tokio::test(start_paused = true)]
    async fn blank_message_is_rejected() {
        let (handler, session) = handler().await;

        let result = handler.handle(SendMessageCommand::new("   \n")).await;

        assert_eq!(result.unwrap_err(), SendMessageError::EmptyContent);
        assert_eq!(session.view().messages.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn message_is_appended_before_reply() {
        let (handler, session) = handler().await;

        let result = handler.handle(SendMessageCommand::new("hello")).await.unwrap();

        let view = session.view();
        assert_eq!(view.messages.len(), 2);
        assert!(view.is_typing);
        assert_eq!(result.user_message, Message::user("hello"));
        assert_eq!(result.reply.kind, ResponseKind::Greeting);

        result.delivery.wait().await.unwrap();
        let view = session.view();
        assert_eq!(view.messages.len(), 3);
        assert!(!view.is_typing);
    }

    #[tokio::test(start_paused = true)]
    async fn context_is_updated_immediately() {
        let (handler, _session) = handler().await;

        let result = handler
            .handle(SendMessageCommand::new("How much is my AutoCAD worth?"))
            .await
            .unwrap();

        assert_eq!(result.context.license_type(), Some("AutoCAD"));
        assert_eq!(result.context.user_intent(), Some(UserIntent::Valuation));
        assert_eq!(result.context.stage(), Stage::Valuation);
        assert_eq!(result.reply.kind, ResponseKind::LicenseValuation);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_follows_reply_length() {
        let (handler, session) = handler().await;

        let result = handler.handle(SendMessageCommand::new("thanks")).await.unwrap();

        assert_eq!(
            result.reply_delay,
            session.timing().typing.for_text(&result.reply.text)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_while_lead_form_open() {
        let (handler, session) = handler().await;
        session.open_lead_form().await;

        let result = handler.handle(SendMessageCommand::new("hello")).await;

        assert_eq!(result.unwrap_err(), SendMessageError::LeadFormOpen);
    }
}

//! Chat widget facade.
//!
//! Wires one [`ChatSession`] to every command handler and exposes the calls a
//! rendering surface makes.

use std::sync::Arc;

use tokio::sync::watch;

use super::handlers::{
    CancelLeadFormCommand, ClearChatCommand, ClearChatHandler, ClearChatResult, LeadFormError,
    LeadFormHandler, OpenLeadFormCommand, QuickActionCommand, QuickActionError,
    QuickActionHandler, QuickActionResult, SendMessageCommand, SendMessageError,
    SendMessageHandler, SendMessageResult, SubmitLeadFormCommand, SubmitLeadFormResult,
    UpdateLeadFieldCommand,
};
use super::session::{ChatSession, SessionOptions, WidgetView};
use crate::domain::conversation::{ConversationContext, QuickAction};
use crate::domain::lead::{LeadField, LeadFormData};
use crate::ports::LocalStorage;

pub struct ChatWidget {
    session: Arc<ChatSession>,
    send_message: SendMessageHandler,
    clear_chat: ClearChatHandler,
    quick_action: QuickActionHandler,
    lead_form: LeadFormHandler,
}

impl ChatWidget {
    /// Loads the persisted conversation and builds the handlers.
    pub async fn load(storage: Arc<dyn LocalStorage>, options: SessionOptions) -> Self {
        let session = ChatSession::load(storage, options).await;
        Self::from_session(session)
    }

    pub fn from_session(session: Arc<ChatSession>) -> Self {
        Self {
            send_message: SendMessageHandler::new(session.clone()),
            clear_chat: ClearChatHandler::new(session.clone()),
            quick_action: QuickActionHandler::new(session.clone()),
            lead_form: LeadFormHandler::new(session.clone()),
            session,
        }
    }

    pub fn session(&self) -> &Arc<ChatSession> {
        &self.session
    }

    pub fn view(&self) -> WidgetView {
        self.session.view()
    }

    pub fn subscribe(&self) -> watch::Receiver<WidgetView> {
        self.session.subscribe()
    }

    pub async fn context(&self) -> ConversationContext {
        self.session.lock().await.context.clone()
    }

    pub async fn send_message(
        &self,
        text: impl Into<String>,
    ) -> Result<SendMessageResult, SendMessageError> {
        self.send_message
            .handle(SendMessageCommand::new(text))
            .await
    }

    pub async fn clear_chat(&self) -> ClearChatResult {
        self.clear_chat.handle(ClearChatCommand).await
    }

    pub async fn quick_action(
        &self,
        action: QuickAction,
    ) -> Result<QuickActionResult, QuickActionError> {
        self.quick_action
            .handle(QuickActionCommand::new(action))
            .await
    }

    pub async fn request_valuation(&self) -> Result<QuickActionResult, QuickActionError> {
        self.quick_action(QuickAction::Valuation).await
    }

    pub async fn schedule_consultation(&self) -> Result<QuickActionResult, QuickActionError> {
        self.quick_action(QuickAction::Schedule).await
    }

    pub async fn open_lead_form(&self) -> bool {
        self.lead_form.open(OpenLeadFormCommand).await
    }

    pub async fn update_lead_field(
        &self,
        field: LeadField,
        value: impl Into<String>,
    ) -> Result<LeadFormData, LeadFormError> {
        self.lead_form
            .update_field(UpdateLeadFieldCommand::new(field, value))
            .await
    }

    pub async fn submit_lead_form(&self) -> Result<SubmitLeadFormResult, LeadFormError> {
        self.lead_form.submit(SubmitLeadFormCommand).await
    }

    pub async fn cancel_lead_form(&self) -> Result<(), LeadFormError> {
        self.lead_form.cancel(CancelLeadFormCommand).await
    }

    /// Waits until all pending replies and deferred effects have run.
    pub async fn settle(&self) {
        self.session.settle().await;
    }

    pub fn shutdown(&self) {
        self.session.shutdown();
    }
}

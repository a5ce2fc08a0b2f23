//! Lead form command handlers.
//!
//! Opening shows the form with a prompt, updates edit one field at a time, and
//! submission either acknowledges the lead or asks for the missing fields.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::application::session::ChatSession;
use crate::domain::conversation::{Message, Sender};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::lead::{
    LeadField, LeadFormData, LeadGate, LeadSubmission, INCOMPLETE_FORM_REPLY,
};

/// Command to open the lead form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLeadFormCommand;

/// Command to change one lead form field.
#[derive(Debug, Clone)]
pub struct UpdateLeadFieldCommand {
    pub field: LeadField,
    pub value: String,
}

impl UpdateLeadFieldCommand {
    pub fn new(field: LeadField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Command to submit the lead form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitLeadFormCommand;

/// Command to close the lead form without submitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelLeadFormCommand;

/// Errors that can occur while working with the lead form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    #[error("Lead form is not open")]
    NotOpen,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitLeadFormResult {
    /// The lead was acknowledged and the form closed.
    Submitted(LeadSubmission),
    /// Required fields were blank; the form stays open.
    Incomplete { missing: Vec<LeadField> },
}

/// Handler for all lead form commands.
#[derive(Clone)]
pub struct LeadFormHandler {
    session: Arc<ChatSession>,
}

impl LeadFormHandler {
    pub fn new(session: Arc<ChatSession>) -> Self {
        Self { session }
    }

    /// Opens the form. Returns false if it was already open.
    pub async fn open(&self, _cmd: OpenLeadFormCommand) -> bool {
        self.session.open_lead_form().await
    }

    pub async fn update_field(
        &self,
        cmd: UpdateLeadFieldCommand,
    ) -> Result<LeadFormData, LeadFormError> {
        let mut state = self.session.lock().await;
        if !state.gate.is_open() {
            return Err(LeadFormError::NotOpen);
        }

        state.form.set(cmd.field, &cmd.value)?;
        self.session.publish(&state);
        Ok(state.form.clone())
    }

    pub async fn submit(
        &self,
        _cmd: SubmitLeadFormCommand,
    ) -> Result<SubmitLeadFormResult, LeadFormError> {
        let mut state = self.session.lock().await;
        if !state.gate.is_open() {
            return Err(LeadFormError::NotOpen);
        }

        let submission = match state.form.validate() {
            Ok(submission) => submission,
            Err(_) => {
                let missing = state.form.missing_fields();
                state
                    .store
                    .append_message(Sender::Bot, INCOMPLETE_FORM_REPLY)
                    .await;
                self.session.publish(&state);
                debug!(?missing, "Lead form incomplete");
                return Ok(SubmitLeadFormResult::Incomplete { missing });
            }
        };

        state.gate = state.gate.transition_to(LeadGate::Chatting)?;
        state
            .store
            .append_messages([
                Message::user(submission.contact_request()),
                Message::bot(submission.confirmation()),
            ])
            .await;
        state.form = LeadFormData::new();
        state.context.mark_follow_up();
        self.session.publish(&state);

        info!(
            license_type = submission.license_type.map(|t| t.as_str()),
            "Lead captured"
        );
        Ok(SubmitLeadFormResult::Submitted(submission))
    }

    pub async fn cancel(&self, _cmd: CancelLeadFormCommand) -> Result<(), LeadFormError> {
        let mut state = self.session.lock().await;
        if !state.gate.is_open() {
            return Err(LeadFormError::NotOpen);
        }

        state.gate = state.gate.transition_to(LeadGate::Chatting)?;
        state.form = LeadFormData::new();
        self.session.publish(&state);
        debug!("Lead form cancelled");
        Ok(())
    }
}

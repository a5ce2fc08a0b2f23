//! Chat session: the single owner of all widget state.
//!
//! Event handlers and scheduled tasks both go through the session lock, so
//! every mutation is applied whole. After each mutation the session publishes
//! a fresh [`WidgetView`] to subscribers.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{watch, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::scheduler::{ScheduledTask, TaskScheduler};
use super::store::{ConversationStore, HISTORY_KEY};
use crate::domain::conversation::{
    shows_example_questions, ConversationContext, IntentClassifier, Message, Reply,
    ResponseSelector, Sender, SideEffect, Stage, TypingDelay, EXAMPLE_QUESTIONS,
};
use crate::domain::foundation::StateMachine;
use crate::domain::lead::{LeadFormData, LeadGate, LEAD_FORM_PROMPT};
use crate::ports::LocalStorage;

/// Delays applied to replies and their side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTiming {
    pub typing: TypingDelay,
    pub simulate_typing: bool,
    pub lead_form_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for ReplyTiming {
    fn default() -> Self {
        Self {
            typing: TypingDelay::default(),
            simulate_typing: true,
            lead_form_delay: Duration::from_millis(1000),
            reset_delay: Duration::from_millis(500),
        }
    }
}

impl ReplyTiming {
    /// Time before a reply with this text is delivered.
    pub fn reply_delay(&self, text: &str) -> Duration {
        if self.simulate_typing {
            self.typing.for_text(text)
        } else {
            Duration::ZERO
        }
    }
}

/// Session construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub storage_key: String,
    pub timing: ReplyTiming,
    pub example_questions: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            storage_key: HISTORY_KEY.to_string(),
            timing: ReplyTiming::default(),
            example_questions: true,
        }
    }
}

/// Snapshot handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub messages: Vec<Message>,
    pub is_typing: bool,
    pub lead_form_open: bool,
    pub lead_form: LeadFormData,
    pub stage: Stage,
    pub license_type: Option<String>,
    pub example_questions: Vec<&'static str>,
}

/// Mutable state guarded by the session lock.
#[derive(Debug)]
pub struct SessionState {
    pub store: ConversationStore,
    pub context: ConversationContext,
    pub gate: LeadGate,
    pub form: LeadFormData,
    pub pending_replies: usize,
}

pub struct ChatSession {
    state: Mutex<SessionState>,
    view_tx: watch::Sender<WidgetView>,
    scheduler: TaskScheduler,
    classifier: IntentClassifier,
    selector: ResponseSelector,
    timing: ReplyTiming,
    example_questions: bool,
}

impl ChatSession {
    /// Restores the transcript from storage and starts a fresh context.
    pub async fn load(storage: Arc<dyn LocalStorage>, options: SessionOptions) -> Arc<Self> {
        let store = ConversationStore::load_initial(storage, options.storage_key).await;
        let state = SessionState {
            store,
            context: ConversationContext::new(),
            gate: LeadGate::default(),
            form: LeadFormData::new(),
            pending_replies: 0,
        };

        let initial_view = Self::render(&state, options.example_questions);
        let (view_tx, _) = watch::channel(initial_view);

        Arc::new(Self {
            state: Mutex::new(state),
            view_tx,
            scheduler: TaskScheduler::new(),
            classifier: IntentClassifier::new(),
            selector: ResponseSelector::new(),
            timing: options.timing,
            example_questions: options.example_questions,
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().await
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    pub fn timing(&self) -> &ReplyTiming {
        &self.timing
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    /// Latest published view.
    pub fn view(&self) -> WidgetView {
        self.view_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WidgetView> {
        self.view_tx.subscribe()
    }

    /// Publishes the view for the given state.
    pub fn publish(&self, state: &SessionState) {
        self.view_tx
            .send_replace(Self::render(state, self.example_questions));
    }

    fn render(state: &SessionState, example_questions: bool) -> WidgetView {
        let lead_form_open = state.gate.is_open();
        let examples = if example_questions
            && shows_example_questions(state.store.len(), lead_form_open)
        {
            EXAMPLE_QUESTIONS.to_vec()
        } else {
            Vec::new()
        };

        WidgetView {
            messages: state.store.messages().to_vec(),
            is_typing: state.pending_replies > 0,
            lead_form_open,
            lead_form: state.form.clone(),
            stage: state.context.stage(),
            license_type: state.context.license_type().map(str::to_string),
            example_questions: examples,
        }
    }

    /// Opens the lead form within an already held lock.
    ///
    /// Returns false if the form was already open.
    pub async fn open_lead_form_locked(&self, state: &mut SessionState) -> bool {
        let next = match state.gate.transition_to(LeadGate::CollectingLead) {
            Ok(next) => next,
            Err(_) => {
                debug!("Lead form already open");
                return false;
            }
        };

        state.gate = next;
        state.form = LeadFormData::new();
        state
            .store
            .append_message(Sender::Bot, LEAD_FORM_PROMPT)
            .await;
        debug!("Lead form opened");
        true
    }

    /// Opens the lead form and publishes.
    pub async fn open_lead_form(&self) -> bool {
        let mut state = self.lock().await;
        let opened = self.open_lead_form_locked(&mut state).await;
        if opened {
            self.publish(&state);
        }
        opened
    }

    /// Resets the transcript and context.
    ///
    /// Returns the number of messages discarded.
    pub async fn clear(&self) -> usize {
        let mut state = self.lock().await;
        let discarded = state.store.len();
        state.store.clear().await;
        state.context.reset();
        self.publish(&state);
        info!(discarded, "Conversation cleared");
        discarded
    }

    /// Schedules delivery of a reply after its typing delay.
    pub fn schedule_reply(self: &Arc<Self>, reply: Reply) -> ScheduledTask {
        let delay = self.timing.reply_delay(&reply.text);
        let session = Arc::clone(self);
        self.scheduler
            .schedule("bot_reply", delay, move |token| async move {
                session.deliver_reply(reply, token).await;
            })
    }

    async fn deliver_reply(self: Arc<Self>, reply: Reply, token: CancellationToken) {
        let mut state = self.lock().await;
        state.pending_replies = state.pending_replies.saturating_sub(1);

        if reply.is_appended() {
            state.store.append_message(Sender::Bot, reply.text.as_str()).await;
        }
        debug!(kind = ?reply.kind, "Reply delivered");

        match reply.side_effect {
            Some(SideEffect::OpenLeadForm) => {
                let session = Arc::clone(&self);
                self.scheduler.schedule_under(
                    &token,
                    "open_lead_form",
                    self.timing.lead_form_delay,
                    move |_| async move {
                        session.open_lead_form().await;
                    },
                );
            }
            Some(SideEffect::ResetConversation) => {
                let session = Arc::clone(&self);
                self.scheduler.schedule_under(
                    &token,
                    "reset_conversation",
                    self.timing.reset_delay,
                    move |_| async move {
                        session.clear().await;
                    },
                );
            }
            None => {}
        }

        self.publish(&state);
    }

    /// Waits until every scheduled reply and side effect has run.
    pub async fn settle(&self) {
        self.scheduler.wait_idle().await;
    }

    /// Cancels all outstanding scheduled work.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLocalStorage;
    use crate::domain::conversation::{ResponseKind, DEFAULT_GREETING};

    async fn session() -> Arc<ChatSession> {
        ChatSession::load(Arc::new(InMemoryLocalStorage::new()), SessionOptions::default()).await
    }

    fn reply(kind: ResponseKind, text: &str, side_effect: Option<SideEffect>) -> Reply {
        Reply {
            kind,
            text: text.to_string(),
            side_effect,
        }
    }

    #[test]
    fn reply_delay_respects_switch() {
        let mut timing = ReplyTiming::default();
        assert_eq!(timing.reply_delay(""), Duration::from_millis(500));
        timing.simulate_typing = false;
        assert_eq!(timing.reply_delay("anything"), Duration::ZERO);
    }

    #[tokio::test]
    async fn initial_view_shows_greeting_and_examples() {
        let view = session().await.view();
        assert_eq!(view.messages, vec![Message::bot(DEFAULT_GREETING)]);
        assert!(!view.is_typing);
        assert!(!view.lead_form_open);
        assert_eq!(view.example_questions.len(), 6);
    }

    #[tokio::test]
    async fn examples_can_be_disabled() {
        let options = SessionOptions {
            example_questions: false,
            ..SessionOptions::default()
        };
        let session = ChatSession::load(Arc::new(InMemoryLocalStorage::new()), options).await;
        assert!(session.view().example_questions.is_empty());
    }

    #[tokio::test]
    async fn open_lead_form_is_idempotent() {
        let session = session().await;
        assert!(session.open_lead_form().await);
        assert!(!session.open_lead_form().await);

        let view = session.view();
        assert!(view.lead_form_open);
        assert_eq!(view.messages.len(), 2);
        assert_eq!(view.messages[1].text(), LEAD_FORM_PROMPT);
        assert!(view.example_questions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_reply_clears_typing_flag() {
        let session = session().await;
        session.lock().await.pending_replies += 1;

        session
            .schedule_reply(reply(ResponseKind::Thanks, "ok", None))
            .wait()
            .await
            .unwrap();

        let view = session.view();
        assert!(!view.is_typing);
        assert_eq!(view.messages.last(), Some(&Message::bot("ok")));
    }

    #[tokio::test(start_paused = true)]
    async fn open_side_effect_runs_after_reply() {
        let session = session().await;
        session.schedule_reply(reply(
            ResponseKind::ContactRouting,
            "connecting",
            Some(SideEffect::OpenLeadForm),
        ));

        session.settle().await;

        let view = session.view();
        assert!(view.lead_form_open);
        let texts: Vec<&str> = view.messages.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec![DEFAULT_GREETING, "connecting", LEAD_FORM_PROMPT]);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_side_effect_suppresses_reply_and_clears() {
        let session = session().await;
        {
            let mut state = session.lock().await;
            state.store.append_message(Sender::User, "reset").await;
            state.context.record_license("AWS");
        }

        session.schedule_reply(reply(
            ResponseKind::Reset,
            "I've reset our conversation.",
            Some(SideEffect::ResetConversation),
        ));
        session.settle().await;

        let view = session.view();
        assert_eq!(view.messages, vec![Message::bot(DEFAULT_GREETING)]);
        assert_eq!(view.license_type, None);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_reply() {
        let session = session().await;
        let task = session.schedule_reply(reply(ResponseKind::Thanks, "late", None));
        session.shutdown();
        task.wait().await.unwrap();
        assert_eq!(session.view().messages.len(), 1);
    }
}

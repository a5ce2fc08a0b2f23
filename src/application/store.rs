//! Conversation store: the transcript plus its persistence.
//!
//! Every mutation writes the full transcript before returning. Storage faults
//! never surface to callers; reads fall back to the greeting and failed writes
//! are logged.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::conversation::{Message, Sender, Transcript};
use crate::ports::LocalStorage;

/// Storage key the transcript is kept under.
pub const HISTORY_KEY: &str = "softSellChatHistory";

pub struct ConversationStore {
    transcript: Transcript,
    storage: Arc<dyn LocalStorage>,
    key: String,
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore")
            .field("key", &self.key)
            .field("messages", &self.transcript.len())
            .finish()
    }
}

impl ConversationStore {
    /// Restores the persisted transcript, or starts from the greeting.
    pub async fn load_initial(storage: Arc<dyn LocalStorage>, key: impl Into<String>) -> Self {
        let key = key.into();

        let transcript = match storage.get_item(&key).await {
            Ok(Some(raw)) => match Transcript::from_json(&raw) {
                Ok(transcript) => {
                    debug!(key = %key, messages = transcript.len(), "Restored chat history");
                    transcript
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored chat history is malformed, starting fresh");
                    Transcript::initial()
                }
            },
            Ok(None) => {
                debug!(key = %key, "No stored chat history");
                Transcript::initial()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read chat history, starting fresh");
                Transcript::initial()
            }
        };

        Self {
            transcript,
            storage,
            key,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends one message and persists.
    pub async fn append_message(&mut self, sender: Sender, text: impl Into<String>) {
        self.transcript.push(Message::new(sender, text));
        self.persist().await;
    }

    /// Appends several messages with a single write.
    pub async fn append_messages(&mut self, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            self.transcript.push(message);
        }
        self.persist().await;
    }

    /// Returns to the single greeting and drops the stored entry.
    pub async fn clear(&mut self) {
        self.transcript = Transcript::initial();

        if let Err(e) = self.storage.remove_item(&self.key).await {
            error!(key = %self.key, error = %e, "Failed to remove chat history");
        }
    }

    async fn persist(&self) {
        let json = match self.transcript.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to serialize chat history");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(&self.key, &json).await {
            error!(key = %self.key, error = %e, "Failed to persist chat history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLocalStorage;
    use crate::domain::conversation::DEFAULT_GREETING;

    async fn fresh() -> (ConversationStore, InMemoryLocalStorage) {
        let storage = InMemoryLocalStorage::new();
        let store = ConversationStore::load_initial(Arc::new(storage.clone()), HISTORY_KEY).await;
        (store, storage)
    }

    mod load_initial {
        use super::*;

        #[tokio::test]
        async fn missing_entry_yields_greeting() {
            let (store, storage) = fresh().await;
            assert!(store.transcript().is_initial());
            assert_eq!(store.messages()[0].text(), DEFAULT_GREETING);
            assert_eq!(storage.write_count(), 0);
        }

        #[tokio::test]
        async fn restores_stored_transcript() {
            let raw = r#"[{"sender":"bot","text":"hello"},{"sender":"user","text":"hi"}]"#;
            let storage = InMemoryLocalStorage::with_item(HISTORY_KEY, raw);
            let store = ConversationStore::load_initial(Arc::new(storage), HISTORY_KEY).await;

            assert_eq!(store.len(), 2);
            assert_eq!(store.messages()[1], Message::user("hi"));
        }

        #[tokio::test]
        async fn malformed_entry_falls_back_to_greeting() {
            let storage = InMemoryLocalStorage::with_item(HISTORY_KEY, "{not json");
            let store = ConversationStore::load_initial(Arc::new(storage), HISTORY_KEY).await;
            assert!(store.transcript().is_initial());
        }

        #[tokio::test]
        async fn empty_array_is_kept_as_is() {
            let storage = InMemoryLocalStorage::with_item(HISTORY_KEY, "[]");
            let store = ConversationStore::load_initial(Arc::new(storage), HISTORY_KEY).await;
            assert!(store.is_empty());
        }
    }

    mod mutations {
        use super::*;

        #[tokio::test]
        async fn append_persists_full_transcript() {
            let (mut store, storage) = fresh().await;
            store.append_message(Sender::User, "hello").await;

            let raw = storage.get_item(HISTORY_KEY).await.unwrap().unwrap();
            let persisted = Transcript::from_json(&raw).unwrap();
            assert_eq!(&persisted, store.transcript());
            assert_eq!(persisted.len(), 2);
        }

        #[tokio::test]
        async fn append_messages_writes_once() {
            let (mut store, storage) = fresh().await;
            store
                .append_messages([Message::user("a"), Message::bot("b")])
                .await;
            assert_eq!(store.len(), 3);
            assert_eq!(storage.write_count(), 1);
        }

        #[tokio::test]
        async fn failed_write_keeps_in_memory_transcript() {
            let (mut store, storage) = fresh().await;
            storage.fail_writes(true);

            store.append_message(Sender::User, "still here").await;

            assert_eq!(store.len(), 2);
            assert_eq!(storage.get_item(HISTORY_KEY).await.unwrap(), None);
        }

        #[tokio::test]
        async fn clear_removes_entry_and_resets() {
            let (mut store, storage) = fresh().await;
            store.append_message(Sender::User, "hello").await;

            store.clear().await;

            assert!(store.transcript().is_initial());
            assert_eq!(storage.get_item(HISTORY_KEY).await.unwrap(), None);
        }

        #[tokio::test]
        async fn reload_after_append_round_trips() {
            let (mut store, storage) = fresh().await;
            store.append_message(Sender::User, "How much?").await;
            store.append_message(Sender::Bot, "Line one\nLine two").await;

            let reloaded =
                ConversationStore::load_initial(Arc::new(storage), HISTORY_KEY).await;
            assert_eq!(reloaded.transcript(), store.transcript());
        }
    }
}

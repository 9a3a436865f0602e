//! Chat Client
//!
//! Mediates one user submission into one request/response cycle against
//! the backend: append the user turn, exchange, append the reply. When
//! the exchange fails for any reason the failure is swallowed and
//! surfaced as a fallback bot turn — the store always answers, the
//! caller never sees an error.

use std::sync::Arc;

use crate::backend::{ChatBackend, ChatRequest};
use crate::config::ChatConfig;
use crate::store::MessageStore;
use crate::turn::ChatTurn;

/// What a call to [`ChatClient::send`] did to the store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input: nothing appended, no request issued
    Skipped,
    /// Backend answered; its reply was appended
    Replied,
    /// Exchange failed; the fallback turn was appended instead
    Fallback,
}

/// The chat client
pub struct ChatClient {
    backend: Arc<dyn ChatBackend>,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(backend: Arc<dyn ChatBackend>, config: ChatConfig) -> Self {
        Self { backend, config }
    }

    /// Create with default configuration
    pub fn with_defaults(backend: Arc<dyn ChatBackend>) -> Self {
        Self::new(backend, ChatConfig::default())
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Run one submission through the exchange cycle
    ///
    /// Input whose trimmed form is empty is a no-op. Otherwise the user
    /// turn is appended synchronously before the exchange starts, and a
    /// bot turn (reply or fallback) is appended once it settles, so every
    /// user turn ends up answered.
    ///
    /// Calls are independent: nothing here prevents two overlapping sends
    /// from interleaving their bot turns.
    pub async fn send(&self, store: &mut MessageStore, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Skipped;
        }

        store.append(ChatTurn::user(text));

        let request = ChatRequest::new(self.config.user_id.as_str(), text);
        match self.backend.exchange(&request).await {
            Ok(reply) => {
                tracing::debug!(backend = self.backend.name(), "exchange succeeded");
                store.append(ChatTurn::bot(reply.response));
                SendOutcome::Replied
            }
            Err(error) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    %error,
                    "exchange failed, answering with fallback"
                );
                store.append(ChatTurn::bot(self.config.fallback.as_str()));
                SendOutcome::Fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::backend::ChatResponse;
    use crate::error::{ChatError, Result};
    use crate::turn::Sender;

    /// Backend that always answers with a fixed reply, counting calls
    struct CannedBackend {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl CannedBackend {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn exchange(&self, _request: &ChatRequest) -> Result<ChatResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(ChatResponse {
                    response: text.into(),
                }),
                None => Err(ChatError::Unreachable("connection refused".into())),
            }
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn client_and_store(backend: Arc<CannedBackend>) -> (ChatClient, MessageStore) {
        let config = ChatConfig::default();
        let store = MessageStore::new(config.greeting.as_str());
        (ChatClient::new(backend, config), store)
    }

    #[tokio::test]
    async fn test_send_appends_user_then_bot_turn() {
        let backend = Arc::new(CannedBackend::replying("Hello"));
        let (client, mut store) = client_and_store(backend.clone());

        let outcome = client.send(&mut store, "Hi").await;

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(store.len(), 3);
        assert_eq!(store.turns()[1].sender, Sender::User);
        assert_eq!(store.turns()[1].text, "Hi");
        let last = store.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "Hello");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_is_a_no_op() {
        let backend = Arc::new(CannedBackend::replying("Hello"));
        let (client, mut store) = client_and_store(backend.clone());

        assert_eq!(client.send(&mut store, "").await, SendOutcome::Skipped);
        assert_eq!(client.send(&mut store, "   \t\n").await, SendOutcome::Skipped);

        assert_eq!(store.len(), 1);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_exchange_appends_fallback_turn() {
        let backend = Arc::new(CannedBackend::failing());
        let (client, mut store) = client_and_store(backend);

        let outcome = client.send(&mut store, "Hi").await;

        assert_eq!(outcome, SendOutcome::Fallback);
        assert_eq!(store.len(), 3);
        let last = store.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, crate::config::DEFAULT_FALLBACK);
    }

    #[tokio::test]
    async fn test_greeting_stays_first_across_sends() {
        let backend = Arc::new(CannedBackend::replying("Hello"));
        let (client, mut store) = client_and_store(backend);

        client.send(&mut store, "un").await;
        client.send(&mut store, "deux").await;

        let first = store.turns().first().unwrap();
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, crate::config::DEFAULT_GREETING);
    }

    #[tokio::test]
    async fn test_enter_submission_matches_direct_send() {
        use crate::compose::{Composer, KeyEvent};

        let backend = Arc::new(CannedBackend::replying("Hello"));
        let (client, mut store) = client_and_store(backend.clone());

        let mut composer = Composer::new();
        composer.insert_str("Hi");

        // Shift+Enter must not reach the store.
        composer.handle_key(KeyEvent::shift_enter());
        assert_eq!(store.len(), 1);
        assert_eq!(backend.calls(), 0);
        composer = Composer::new();
        composer.insert_str("Hi");

        // Plain Enter mutates the store exactly like a direct send.
        let submitted = composer.handle_key(KeyEvent::enter()).unwrap();
        client.send(&mut store, &submitted).await;

        assert_eq!(store.len(), 3);
        assert_eq!(store.turns()[1].text, "Hi");
        assert_eq!(store.last().unwrap().text, "Hello");
    }

    #[tokio::test]
    async fn test_untrimmed_text_is_sent_as_is() {
        let backend = Arc::new(CannedBackend::replying("Hello"));
        let (client, mut store) = client_and_store(backend);

        client.send(&mut store, "  Hi  ").await;

        // The gate trims, the turn and request do not.
        assert_eq!(store.turns()[1].text, "  Hi  ");
    }
}

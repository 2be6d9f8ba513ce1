//! Relay Update use case.
//!
//! The background half of the Telegram webhook: the HTTP handler has already
//! acknowledged the delivery by the time this runs, so nothing here may
//! propagate an error back to the provider. Every failure path ends in either
//! a best-effort apology message or a log line.

use crate::ports::inquiry_client::InquiryClient;
use crate::ports::messenger::Messenger;
use rica_domain::truncate_str;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Fixed fallback sent when the relay fails anywhere before the final send.
const APOLOGY_TEXT: &str = "\u{26a0}\u{fe0f} Something went wrong. Please try again.";

/// What happened to one webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The update was not a text message; nothing was done.
    Ignored,
    /// The reply reached the originating chat.
    Replied,
    /// The relay failed and the apology message was delivered instead.
    ApologySent,
    /// The relay failed and even the apology could not be delivered.
    ApologyFailed,
}

/// Use case for processing one webhook update after acknowledgment
pub struct RelayUpdateUseCase {
    inquiry_client: Arc<dyn InquiryClient>,
    messenger: Arc<dyn Messenger>,
}

impl RelayUpdateUseCase {
    pub fn new(inquiry_client: Arc<dyn InquiryClient>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            inquiry_client,
            messenger,
        }
    }

    /// Process one update.
    ///
    /// Never fails: the provider already got its `{"ok": true}`, so errors
    /// here are converted into the apology fallback or swallowed with a log.
    pub async fn execute(&self, update: serde_json::Value) -> RelayOutcome {
        // Not every update shape is a message (edits, joins, callbacks...);
        // those are ignored without complaint.
        let Some((chat_id, text)) = extract_text_message(&update) else {
            debug!("Webhook update carried no text message, ignoring");
            return RelayOutcome::Ignored;
        };

        info!(
            "Relaying message from chat {}: {}",
            chat_id,
            truncate_str(text, 80)
        );

        match self.relay(chat_id, text).await {
            Ok(()) => RelayOutcome::Replied,
            Err(e) => {
                error!("Relay for chat {} failed: {}", chat_id, e);
                self.send_apology(chat_id).await
            }
        }
    }

    async fn relay(&self, chat_id: i64, text: &str) -> Result<(), String> {
        let answer = self
            .inquiry_client
            .ask(text)
            .await
            .map_err(|e| format!("ask endpoint: {}", e))?;

        self.messenger
            .send_message(chat_id, &answer.response)
            .await
            .map_err(|e| format!("send-message: {}", e))
    }

    async fn send_apology(&self, chat_id: i64) -> RelayOutcome {
        match self.messenger.send_message(chat_id, APOLOGY_TEXT).await {
            Ok(()) => RelayOutcome::ApologySent,
            Err(e) => {
                // Nothing left to do but log; the webhook must stay quiet.
                error!("Failed to send apology to chat {}: {}", chat_id, e);
                RelayOutcome::ApologyFailed
            }
        }
    }
}

/// Pull `(chat id, text)` out of a provider update, if it is a text message.
fn extract_text_message(update: &serde_json::Value) -> Option<(i64, &str)> {
    let message = update.get("message")?;
    let chat_id = message.get("chat")?.get("id")?.as_i64()?;
    let text = message.get("text")?.as_str()?;
    Some((chat_id, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inquiry_client::{AskResponse, InquiryClientError};
    use crate::ports::messenger::MessengerError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockInquiryClient {
        reply: Result<String, ()>,
        calls: Mutex<usize>,
    }

    impl MockInquiryClient {
        fn answering(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Mutex::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl InquiryClient for MockInquiryClient {
        async fn ask(&self, query_text: &str) -> Result<AskResponse, InquiryClientError> {
            *self.calls.lock().unwrap() += 1;
            match &self.reply {
                Ok(response) => Ok(AskResponse {
                    response: response.clone(),
                    original_query: query_text.to_string(),
                }),
                Err(()) => Err(InquiryClientError::Timeout),
            }
        }
    }

    struct MockMessenger {
        // One entry per expected send; true = fail that send
        failures: Mutex<Vec<bool>>,
        sent: Mutex<Vec<(i64, String)>>,
    }

    impl MockMessenger {
        fn new(failures: Vec<bool>) -> Self {
            Self {
                failures: Mutex::new(failures),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(i64, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Messenger for MockMessenger {
        async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), MessengerError> {
            let mut failures = self.failures.lock().unwrap();
            let fail = if failures.is_empty() {
                false
            } else {
                failures.remove(0)
            };
            if fail {
                return Err(MessengerError::Connection("refused".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((chat_id, text.to_string()));
            Ok(())
        }
    }

    fn message_update(chat_id: i64, text: &str) -> serde_json::Value {
        json!({"message": {"chat": {"id": chat_id}, "text": text}})
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_message_update_is_relayed() {
        let client = Arc::new(MockInquiryClient::answering("Here you go!"));
        let messenger = Arc::new(MockMessenger::new(vec![]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        let outcome = uc.execute(message_update(42, "hello")).await;

        assert_eq!(outcome, RelayOutcome::Replied);
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, 42);
        assert!(!sent[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_update_without_text_is_ignored() {
        let client = Arc::new(MockInquiryClient::answering("unused"));
        let messenger = Arc::new(MockMessenger::new(vec![]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        // A join notification: has a chat but no text
        let outcome = uc
            .execute(json!({"message": {"chat": {"id": 42}, "new_chat_members": []}}))
            .await;

        assert_eq!(outcome, RelayOutcome::Ignored);
        assert_eq!(client.call_count(), 0);
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_non_message_update_is_ignored() {
        let client = Arc::new(MockInquiryClient::answering("unused"));
        let messenger = Arc::new(MockMessenger::new(vec![]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        let outcome = uc.execute(json!({"callback_query": {"id": "1"}})).await;

        assert_eq!(outcome, RelayOutcome::Ignored);
        assert_eq!(client.call_count(), 0);
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_ask_failure_sends_one_apology() {
        let client = Arc::new(MockInquiryClient::failing());
        let messenger = Arc::new(MockMessenger::new(vec![]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        let outcome = uc.execute(message_update(42, "hello")).await;

        assert_eq!(outcome, RelayOutcome::ApologySent);
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, 42);
        assert_eq!(sent[0].1, APOLOGY_TEXT);
    }

    #[tokio::test]
    async fn test_reply_send_failure_falls_back_to_apology() {
        let client = Arc::new(MockInquiryClient::answering("Here you go!"));
        // First send (the reply) fails, second (the apology) succeeds
        let messenger = Arc::new(MockMessenger::new(vec![true, false]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        let outcome = uc.execute(message_update(7, "hello")).await;

        assert_eq!(outcome, RelayOutcome::ApologySent);
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, APOLOGY_TEXT);
    }

    #[tokio::test]
    async fn test_apology_failure_is_swallowed() {
        let client = Arc::new(MockInquiryClient::failing());
        let messenger = Arc::new(MockMessenger::new(vec![true]));
        let uc = RelayUpdateUseCase::new(client.clone(), messenger.clone());

        let outcome = uc.execute(message_update(42, "hello")).await;

        // No panic, no error, just the recorded outcome
        assert_eq!(outcome, RelayOutcome::ApologyFailed);
        assert!(messenger.sent().is_empty());
    }

    #[test]
    fn test_extract_text_message() {
        let update = message_update(42, "hello");
        assert_eq!(extract_text_message(&update), Some((42, "hello")));

        assert_eq!(extract_text_message(&json!({})), None);
        assert_eq!(
            extract_text_message(&json!({"message": {"text": "no chat"}})),
            None
        );
        assert_eq!(
            extract_text_message(&json!({"message": {"chat": {"id": "not a number"}, "text": "x"}})),
            None
        );
    }
}

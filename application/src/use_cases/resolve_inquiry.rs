//! Resolve Inquiry use case.
//!
//! Orchestrates the two-stage resolution pipeline: the assistant persona
//! drafts a reply, then the quality-review persona turns the draft into the
//! final text. Both stages are plain request/response calls to the same
//! model capability; there is no branching and no retry, so a draft failure
//! aborts the whole resolution.

use crate::config::ResolverSettings;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use rica_domain::{Inquiry, InquiryError, PersonaPrompt, Resolution, truncate_str};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during inquiry resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid inquiry: {0}")]
    Invalid(#[from] InquiryError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for resolving one inquiry into one finished response
pub struct ResolveInquiryUseCase {
    gateway: Arc<dyn LlmGateway>,
    settings: ResolverSettings,
}

impl ResolveInquiryUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, settings: ResolverSettings) -> Self {
        Self { gateway, settings }
    }

    /// Resolve raw surface input, defaulting the inquirer label when the
    /// surface has none of its own.
    ///
    /// Validation happens before any gateway call: empty or whitespace-only
    /// text never reaches the model.
    pub async fn resolve(
        &self,
        inquirer: Option<&str>,
        text: &str,
    ) -> Result<Resolution, ResolveError> {
        let inquirer = match inquirer {
            Some(label) if !label.trim().is_empty() => label,
            _ => &self.settings.default_inquirer,
        };
        let inquiry = Inquiry::new(inquirer, text)?;
        self.resolve_inquiry(&inquiry).await
    }

    /// Resolve an already-validated inquiry
    pub async fn resolve_inquiry(&self, inquiry: &Inquiry) -> Result<Resolution, ResolveError> {
        info!(
            "Resolving inquiry from {}: {}",
            inquiry.inquirer(),
            truncate_str(inquiry.text(), 100)
        );

        let draft = self
            .gateway
            .complete(
                PersonaPrompt::draft_system(),
                &PersonaPrompt::draft_prompt(inquiry.inquirer(), inquiry.text()),
            )
            .await?;

        let final_text = if self.settings.enable_review {
            debug!("Draft stage complete ({} bytes), running review", draft.len());
            self.gateway
                .complete(
                    PersonaPrompt::review_system(),
                    &PersonaPrompt::review_prompt(inquiry.inquirer(), inquiry.text(), &draft),
                )
                .await?
        } else {
            debug!("Review stage disabled, returning draft");
            draft
        };

        info!("Inquiry resolved ({} bytes)", final_text.len());
        Ok(Resolution::for_inquiry(inquiry, final_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<&str, &str>>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn call(&self, index: usize) -> (String, String) {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(
            &self,
            system_prompt: &str,
            user_prompt: &str,
        ) -> Result<String, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_prompt.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err("no more responses".to_string()))
                .map_err(GatewayError::Other)
        }
    }

    fn use_case(gateway: &Arc<MockGateway>, settings: ResolverSettings) -> ResolveInquiryUseCase {
        ResolveInquiryUseCase::new(gateway.clone() as Arc<dyn LlmGateway>, settings)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_draft_then_review() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("draft answer"),
            Ok("polished answer"),
        ]));
        let uc = use_case(&gateway, ResolverSettings::default());

        let resolution = uc.resolve(Some("siam"), "How do I deploy?").await.unwrap();

        assert_eq!(resolution.response_text(), "polished answer");
        assert_eq!(resolution.original_query(), "How do I deploy?");
        assert_eq!(gateway.call_count(), 2);

        // The review stage sees the draft text
        let (review_system, review_prompt) = gateway.call(1);
        assert_eq!(review_system, PersonaPrompt::review_system());
        assert!(review_prompt.contains("draft answer"));
    }

    #[tokio::test]
    async fn test_review_disabled_returns_draft() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("draft answer")]));
        let settings = ResolverSettings {
            enable_review: false,
            ..ResolverSettings::default()
        };
        let uc = use_case(&gateway, settings);

        let resolution = uc.resolve(Some("siam"), "Quick one?").await.unwrap();

        assert_eq!(resolution.response_text(), "draft answer");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_text_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("unused")]));
        let uc = use_case(&gateway, ResolverSettings::default());

        let result = uc.resolve(Some("siam"), "   ").await;

        assert!(matches!(
            result.unwrap_err(),
            ResolveError::Invalid(InquiryError::EmptyText)
        ));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_draft_failure_aborts_resolution() {
        let gateway = Arc::new(MockGateway::new(vec![
            Err("model unreachable"),
            Ok("never used"),
        ]));
        let uc = use_case(&gateway, ResolverSettings::default());

        let result = uc.resolve(Some("siam"), "Anything?").await;

        assert!(matches!(result.unwrap_err(), ResolveError::Gateway(_)));
        // No review call after a failed draft
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_inquirer_uses_default() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("draft"), Ok("final")]));
        let settings = ResolverSettings {
            default_inquirer: "the api user".to_string(),
            ..ResolverSettings::default()
        };
        let uc = use_case(&gateway, settings);

        uc.resolve(None, "Who am I?").await.unwrap();

        let (_, draft_prompt) = gateway.call(0);
        assert!(draft_prompt.contains("the api user"));
    }

    #[tokio::test]
    async fn test_blank_inquirer_uses_default() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("draft"), Ok("final")]));
        let uc = use_case(&gateway, ResolverSettings::default());

        uc.resolve(Some("  "), "Who am I?").await.unwrap();

        let (_, draft_prompt) = gateway.call(0);
        assert!(draft_prompt.contains("a user"));
    }
}

//! Product Assistant
//!
//! Turns a visitor's question about a product into one hosted completion call. Every
//! failure collapses into a display string; nothing here ends the session.

use std::{fmt, sync::Arc};

use mercatus::{catalog::Product, language::Language};
use thiserror::Error;
use tracing::{debug, error, warn};

mod client;
mod credentials;
mod gemini;
pub mod prompt;

pub use client::{CompletionClient, CompletionError, MockCompletionClient};
pub use credentials::ApiKey;
pub use gemini::{GeminiClient, GeminiConfig};

/// Shown when the service answers with nothing.
pub const EMPTY_COMPLETION_MESSAGE: &str =
    "I'm having trouble connecting to the neural network. Please try again.";

/// Shown when no credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Error: API Key not configured.";

/// Shown when the call fails.
pub const CONNECTION_INTERRUPTED_MESSAGE: &str =
    "Connection interrupted. Please try again later.";

/// Assistant failures, displayed verbatim to the visitor.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No credential was configured, so no call was made.
    #[error("Error: API Key not configured.")]
    NotConfigured,

    /// The completion call failed.
    #[error("Connection interrupted. Please try again later.")]
    Connection(#[source] CompletionError),
}

/// Gateway between product questions and the completion service
#[derive(Clone)]
pub struct AssistantGateway {
    client: Option<Arc<dyn CompletionClient>>,
}

impl fmt::Debug for AssistantGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantGateway")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AssistantGateway {
    /// Create a gateway backed by the given client.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create a gateway with no credential; every question short-circuits.
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Create a Gemini-backed gateway, or an unconfigured one when `api_key` is
    /// absent or blank.
    pub fn gemini(endpoint: &str, model: &str, api_key: Option<&str>) -> Self {
        match api_key.and_then(ApiKey::new) {
            Some(api_key) => Self::new(Arc::new(GeminiClient::new(GeminiConfig {
                endpoint: endpoint.to_string(),
                model: model.to_string(),
                api_key,
            }))),
            None => Self::unconfigured(),
        }
    }

    /// Whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Ask a question about `product`, answered in `lang`.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::NotConfigured` without calling out when there is no
    /// credential, and `AssistantError::Connection` when the call fails.
    pub async fn ask(
        &self,
        product: &Product,
        question: &str,
        lang: Language,
    ) -> Result<String, AssistantError> {
        let Some(client) = &self.client else {
            warn!(product = %product.id, "assistant asked without a configured API key");

            return Err(AssistantError::NotConfigured);
        };

        let prompt = prompt::build_prompt(product, question, lang);

        debug!(product = %product.id, %lang, "sending assistant prompt");

        match client.complete(&prompt).await {
            Ok(Some(answer)) if !answer.is_empty() => Ok(answer),
            Ok(_) => Ok(EMPTY_COMPLETION_MESSAGE.to_string()),
            Err(source) => {
                error!(product = %product.id, "assistant completion failed: {source}");

                Err(AssistantError::Connection(source))
            }
        }
    }

    /// Ask a question and collapse any failure into its display string.
    pub async fn answer(&self, product: &Product, question: &str, lang: Language) -> String {
        self.ask(product, question, lang)
            .await
            .unwrap_or_else(|error| error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use mercatus::{catalog::ProductId, fixtures::default_catalog};
    use mockall::predicate;
    use testresult::TestResult;

    use super::*;

    fn visor() -> TestResult<Product> {
        let catalog = default_catalog()?;

        catalog
            .get(&ProductId::from("p1"))
            .cloned()
            .ok_or_else(|| std::io::Error::other("p1 missing from default catalog").into())
    }

    fn gateway(mock: MockCompletionClient) -> AssistantGateway {
        AssistantGateway::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn ask_returns_completion_verbatim() -> TestResult {
        let mut mock = MockCompletionClient::new();

        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(Some("  Yes, 12h of glorious battery.  ".to_string())));

        let answer = gateway(mock)
            .ask(&visor()?, "Battery?", Language::En)
            .await?;

        assert_eq!(answer, "  Yes, 12h of glorious battery.  ");

        Ok(())
    }

    #[tokio::test]
    async fn ask_sends_prompt_for_product_and_language() -> TestResult {
        let mut mock = MockCompletionClient::new();

        mock.expect_complete()
            .with(predicate::function(|prompt: &str| {
                prompt.contains("Visor Cibernético Neón") && prompt.contains("es")
            }))
            .times(1)
            .returning(|_| Ok(Some("¡Claro!".to_string())));

        let answer = gateway(mock)
            .ask(&visor()?, "¿Es cómodo?", Language::Es)
            .await?;

        assert_eq!(answer, "¡Claro!");

        Ok(())
    }

    #[tokio::test]
    async fn empty_completion_becomes_fallback() -> TestResult {
        for payload in [None, Some(String::new())] {
            let mut mock = MockCompletionClient::new();

            mock.expect_complete()
                .times(1)
                .returning(move |_| Ok(payload.clone()));

            let answer = gateway(mock)
                .ask(&visor()?, "Hello?", Language::En)
                .await?;

            assert_eq!(answer, EMPTY_COMPLETION_MESSAGE);
        }

        Ok(())
    }

    #[tokio::test]
    async fn unconfigured_gateway_short_circuits() -> TestResult {
        let gateway = AssistantGateway::unconfigured();

        let result = gateway.ask(&visor()?, "Price?", Language::En).await;

        assert!(matches!(result, Err(AssistantError::NotConfigured)));
        assert_eq!(
            gateway.answer(&visor()?, "Price?", Language::En).await,
            NOT_CONFIGURED_MESSAGE
        );

        Ok(())
    }

    #[tokio::test]
    async fn failure_collapses_to_connection_message() -> TestResult {
        let mut mock = MockCompletionClient::new();

        mock.expect_complete()
            .times(1)
            .returning(|_| Err(CompletionError::UnexpectedResponse("503".to_string())));

        let answer = gateway(mock)
            .answer(&visor()?, "Shipping?", Language::It)
            .await;

        assert_eq!(answer, CONNECTION_INTERRUPTED_MESSAGE);

        Ok(())
    }

    #[test]
    fn blank_api_key_means_unconfigured() {
        let gateway =
            AssistantGateway::gemini("http://localhost", "gemini-2.5-flash", Some("   "));

        assert!(!gateway.is_configured());
        assert!(
            AssistantGateway::gemini("http://localhost", "gemini-2.5-flash", Some("k"))
                .is_configured()
        );
    }

    #[test]
    fn error_messages_match_display_constants() {
        assert_eq!(AssistantError::NotConfigured.to_string(), NOT_CONFIGURED_MESSAGE);
        assert_eq!(
            AssistantError::Connection(CompletionError::UnexpectedResponse(String::new()))
                .to_string(),
            CONNECTION_INTERRUPTED_MESSAGE
        );
    }
}

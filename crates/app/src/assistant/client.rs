//! Completion client seam.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Errors that can occur when requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx response or unexpected body.
    #[error("unexpected response from completion service: {0}")]
    UnexpectedResponse(String),
}

/// Single-shot text completion service.
#[automock]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a single, non-streamed completion for `prompt`.
    ///
    /// Returns `Ok(None)` when the service answers without any text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError>;
}

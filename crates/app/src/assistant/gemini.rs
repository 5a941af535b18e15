//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::assistant::{
    client::{CompletionClient, CompletionError},
    credentials::ApiKey,
};

/// Configuration for reaching the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base address, e.g. `"https://generativelanguage.googleapis.com"`.
    pub endpoint: String,

    /// Model name, e.g. `"gemini-2.5-flash"`.
    pub model: String,

    /// API key sent with every request.
    pub api_key: ApiKey,
}

/// HTTP client for single-shot Gemini completions.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", self.config.api_key.expose())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CompletionError::UnexpectedResponse(format!(
                "generateContent failed with status {status}: {text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        Ok(parsed.into_text())
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;

        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client(server: &MockServer) -> TestResult<GeminiClient> {
        let api_key = ApiKey::new("test-key").ok_or_else(|| std::io::Error::other("blank key"))?;

        Ok(GeminiClient::new(GeminiConfig {
            endpoint: format!("{}/", server.uri()),
            model: "gemini-2.5-flash".to_string(),
            api_key,
        }))
    }

    #[tokio::test]
    async fn complete_posts_prompt_and_joins_parts() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "Tell me more" }] }],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Built for " }, { "text": "night runs." }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = client(&server)?.complete("Tell me more").await?;

        assert_eq!(answer.as_deref(), Some("Built for night runs."));

        Ok(())
    }

    #[tokio::test]
    async fn complete_without_candidates_is_none() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let answer = client(&server)?.complete("Anything?").await?;

        assert_eq!(answer, None);

        Ok(())
    }

    #[tokio::test]
    async fn complete_rejects_error_status() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let result = client(&server)?.complete("Anything?").await;

        assert!(
            matches!(
                &result,
                Err(CompletionError::UnexpectedResponse(message)) if message.contains("403")
            ),
            "expected UnexpectedResponse, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn complete_reports_unreachable_service() -> TestResult {
        let closed = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?;
        let api_key = ApiKey::new("test-key").ok_or("blank key")?;

        let client = GeminiClient::new(GeminiConfig {
            endpoint: format!("http://{closed}"),
            model: "gemini-2.5-flash".to_string(),
            api_key,
        });

        let result = client.complete("Anyone there?").await;

        assert!(
            matches!(result, Err(CompletionError::Http(_))),
            "expected Http error, got {result:?}"
        );

        Ok(())
    }
}

//! Assistant Config

use std::fmt;

use clap::Args;

/// Product assistant settings.
#[derive(Args)]
pub struct AssistantConfig {
    /// Gemini API key; the assistant answers with a configuration error when unset
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "ASSISTANT_MODEL", default_value = "gemini-2.5-flash")]
    pub model: String,

    /// Gemini API base address
    #[arg(
        long,
        env = "ASSISTANT_ENDPOINT",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub endpoint: String,
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "**redacted**"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

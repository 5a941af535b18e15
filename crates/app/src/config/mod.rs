//! Shell configuration module

use clap::Parser;

use crate::config::{assistant::AssistantConfig, catalog::CatalogConfig, logging::LoggingConfig};

pub mod assistant;
pub mod catalog;
pub mod logging;

/// Mercatus storefront configuration
#[derive(Debug, Parser)]
#[command(name = "mercatus", about = "Mercatus storefront shell", long_about = None)]
pub struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product assistant settings.
    #[command(flatten)]
    pub assistant: AssistantConfig,

    /// Seed data settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::logging::LogFormat;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = Config::try_parse_from([
            "mercatus",
            "--api-key",
            "k",
            "--model",
            "gemini-test",
            "--endpoint",
            "http://localhost:9999",
            "--log-format",
            "json",
            "--products",
            "fixtures/products.yml",
        ])?;

        assert_eq!(config.assistant.api_key.as_deref(), Some("k"));
        assert_eq!(config.assistant.model, "gemini-test");
        assert_eq!(config.assistant.endpoint, "http://localhost:9999");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(config.catalog.products.is_some());
        assert!(config.catalog.reviews.is_none());

        Ok(())
    }

    #[test]
    fn debug_output_redacts_api_key() -> TestResult {
        let config = Config::try_parse_from(["mercatus", "--api-key", "super-secret"])?;

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("super-secret"));

        Ok(())
    }
}

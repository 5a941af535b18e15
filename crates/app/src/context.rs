//! App Context

use mercatus::{
    catalog::Catalog,
    fixtures::{self, FixtureError},
    reviews::ReviewStore,
    storefront::Storefront,
};
use thiserror::Error;
use tracing::info;

use crate::{
    assistant::AssistantGateway,
    config::{Config, catalog::CatalogConfig},
};

/// Errors raised while assembling the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The products fixture could not be loaded.
    #[error("failed to load product catalog")]
    Catalog(#[source] FixtureError),

    /// The reviews fixture could not be loaded.
    #[error("failed to load seed reviews")]
    Reviews(#[source] FixtureError),
}

/// Everything a running session needs.
#[derive(Debug)]
pub struct AppContext {
    /// Session state.
    pub storefront: Storefront,

    /// Product assistant.
    pub assistant: AssistantGateway,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a seed fixture cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, AppInitError> {
        let (catalog, reviews) = load_seed(&config.catalog)?;

        info!(
            products = catalog.len(),
            reviews = reviews.len(),
            "seed data loaded"
        );

        let assistant = AssistantGateway::gemini(
            &config.assistant.endpoint,
            &config.assistant.model,
            config.assistant.api_key.as_deref(),
        );

        if !assistant.is_configured() {
            info!("no API key configured; assistant questions will not be sent");
        }

        Ok(Self::new(Storefront::new(catalog, reviews), assistant))
    }

    /// Assemble a context from its parts.
    #[must_use]
    pub fn new(storefront: Storefront, assistant: AssistantGateway) -> Self {
        Self {
            storefront,
            assistant,
        }
    }
}

fn load_seed(config: &CatalogConfig) -> Result<(Catalog, ReviewStore), AppInitError> {
    let catalog = match &config.products {
        Some(path) => fixtures::catalog_from_path(path),
        None => fixtures::default_catalog(),
    }
    .map_err(AppInitError::Catalog)?;

    let reviews = match &config.reviews {
        Some(path) => fixtures::reviews_from_path(path),
        None => fixtures::default_reviews(),
    }
    .map_err(AppInitError::Reviews)?;

    Ok((catalog, reviews))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_load_reference_seed() -> TestResult {
        let config = Config::try_parse_from(["mercatus"])?;
        let (catalog, reviews) = load_seed(&config.catalog)?;

        assert_eq!(catalog.len(), 5);
        assert_eq!(reviews.len(), 4);

        Ok(())
    }

    #[test]
    fn missing_fixture_file_fails_init() -> TestResult {
        let config = Config::try_parse_from(["mercatus", "--reviews", "/no/such/reviews.yml"])?;

        let result = AppContext::from_config(&config);

        assert!(
            matches!(result, Err(AppInitError::Reviews(FixtureError::Io(_)))),
            "expected Reviews(Io), got {result:?}"
        );

        Ok(())
    }
}

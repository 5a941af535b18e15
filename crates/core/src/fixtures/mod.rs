//! Fixtures
//!
//! YAML seed data for the catalog and the review store. The reference data set is
//! embedded at compile time; alternative sets can be loaded from disk.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    reviews::{ReviewError, ReviewStore},
};

pub mod products;
pub mod reviews;

const DEFAULT_PRODUCTS: &str = include_str!("../../fixtures/products.yml");
const DEFAULT_REVIEWS: &str = include_str!("../../fixtures/reviews.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid review date
    #[error("Invalid review date: {0}")]
    InvalidDate(String),

    /// Products failed catalog validation
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Reviews failed store validation
    #[error("Invalid reviews: {0}")]
    Reviews(#[from] ReviewError),
}

/// The built-in reference catalog.
///
/// # Errors
///
/// Returns an error if the embedded fixture fails to parse.
pub fn default_catalog() -> Result<Catalog, FixtureError> {
    catalog_from_str(DEFAULT_PRODUCTS)
}

/// The built-in reference reviews, all approved.
///
/// # Errors
///
/// Returns an error if the embedded fixture fails to parse.
pub fn default_reviews() -> Result<ReviewStore, FixtureError> {
    reviews_from_str(DEFAULT_REVIEWS)
}

/// Parse a products fixture.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a price is invalid or the products
/// fail catalog validation.
pub fn catalog_from_str(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: products::ProductsFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, FixtureError>>()?;

    Ok(Catalog::new(products)?)
}

/// Parse a reviews fixture.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a rating or date is invalid or two
/// reviews share an id.
pub fn reviews_from_str(yaml: &str) -> Result<ReviewStore, FixtureError> {
    let fixture: reviews::ReviewsFixture = serde_norway::from_str(yaml)?;

    let reviews = fixture
        .reviews
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, FixtureError>>()?;

    Ok(ReviewStore::new(reviews)?)
}

/// Load a products fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    catalog_from_str(&contents)
}

/// Load a reviews fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn reviews_from_path(path: impl AsRef<Path>) -> Result<ReviewStore, FixtureError> {
    let contents = fs::read_to_string(path)?;

    reviews_from_str(&contents)
}

//! Catalog

use std::fmt;

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::language::{Language, Localized};

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// The translated feature lists have different lengths.
    #[error("product {product} has mismatched feature counts (en: {en}, es: {es}, it: {it})")]
    FeatureMismatch {
        /// Offending product
        product: ProductId,
        /// English feature count
        en: usize,
        /// Spanish feature count
        es: usize,
        /// Italian feature count
        it: usize,
    },
}

/// Opaque product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered feature list for a single language
pub type Features = SmallVec<[String; 4]>;

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub name: Localized<String>,

    /// Long-form description
    pub description: Localized<String>,

    /// Feature bullet points, same order in every language
    pub features: Localized<Features>,

    /// Shelf price
    pub price: Money<'static, Currency>,

    /// Free-text category label
    pub category: String,

    /// Image URL
    pub image: String,
}

impl Product {
    /// Display name in the given language.
    pub fn name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }

    /// Description in the given language.
    pub fn description(&self, lang: Language) -> &str {
        self.description.get(lang)
    }

    /// Feature list in the given language.
    pub fn features(&self, lang: Language) -> &[String] {
        self.features.get(lang)
    }

    fn check_features(&self) -> Result<(), CatalogError> {
        let (en, es, it) = (
            self.features.en.len(),
            self.features.es.len(),
            self.features.it.len(),
        );

        if en == es && es == it {
            Ok(())
        } else {
            Err(CatalogError::FeatureMismatch {
                product: self.id.clone(),
                en,
                es,
                it,
            })
        }
    }
}

/// Immutable, ordered set of products
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if two products share an id or a product's
    /// translated feature lists differ in length.
    pub fn new(products: impl Into<Vec<Product>>) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            product.check_features()?;

            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(*position))
    }

    /// Check whether the catalog holds the given product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rusty_money::iso;
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;

    pub(crate) fn product(id: &str, minor: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: Localized::new(
                format!("{id} name"),
                format!("{id} nombre"),
                format!("{id} nome"),
            ),
            description: Localized::new(
                "A thing".to_string(),
                "Una cosa".to_string(),
                "Una cosa".to_string(),
            ),
            features: Localized::new(
                smallvec!["Fast".to_string(), "Light".to_string()],
                smallvec!["Rápido".to_string(), "Ligero".to_string()],
                smallvec!["Veloce".to_string(), "Leggero".to_string()],
            ),
            price: Money::from_minor(minor, iso::USD),
            category: "Tech".to_string(),
            image: "https://example.com/p.png".to_string(),
        }
    }

    #[test]
    fn new_preserves_order() -> TestResult {
        let catalog = Catalog::new([product("b", 100), product("a", 200)])?;

        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["b", "a"]);
        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = Catalog::new([product("a", 100), product("a", 200)]);

        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateProduct(ProductId::from("a")))
        );
    }

    #[test]
    fn new_rejects_mismatched_features() {
        let mut broken = product("a", 100);
        broken.features.it.pop();

        let result = Catalog::new([broken]);

        assert!(
            matches!(
                result,
                Err(CatalogError::FeatureMismatch {
                    en: 2,
                    es: 2,
                    it: 1,
                    ..
                })
            ),
            "expected FeatureMismatch, got {result:?}"
        );
    }

    #[test]
    fn get_finds_products_by_id() -> TestResult {
        let catalog = Catalog::new([product("a", 100), product("b", 250)])?;

        let found = catalog.get(&ProductId::from("b"));

        assert_eq!(found.map(|p| p.price), Some(Money::from_minor(250, iso::USD)));
        assert!(catalog.get(&ProductId::from("zzz")).is_none());
        assert!(catalog.contains(&ProductId::from("a")));

        Ok(())
    }

    #[test]
    fn localized_accessors() {
        let p = product("a", 100);

        assert_eq!(p.name(Language::Es), "a nombre");
        assert_eq!(p.features(Language::It), ["Veloce", "Leggero"]);
    }
}

//! Mercatus prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, Features, Product, ProductId},
    fixtures::{FixtureError, default_catalog, default_reviews},
    language::{Language, LanguageError, Localized},
    reviews::{
        NewReview, Rating, RatingFilter, Review, ReviewError, ReviewId, ReviewStatus,
        ReviewStore, visible_for,
    },
    selection::{Selection, SelectionError},
    storefront::{AssistantPanel, QuestionTicket, Storefront, StorefrontError, Theme},
};

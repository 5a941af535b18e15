//! Storefront
//!
//! The application-state object for one browsing session. Every mutation goes
//! through `&mut self`; the session is driven from a single event loop, so there is
//! no internal locking.

use std::fmt;

use jiff::{Zoned, civil::Date};
use thiserror::Error;

use crate::{
    catalog::{Catalog, Product, ProductId},
    language::Language,
    reviews::{NewReview, RatingFilter, Review, ReviewError, ReviewId, ReviewStore, visible_for},
    selection::{Selection, SelectionError},
};

/// Errors raised by storefront actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// The action needs an open product.
    #[error("no product is open")]
    NothingSelected,

    /// The selection could not change.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The review was rejected.
    #[error(transparent)]
    Review(#[from] ReviewError),
}

/// Colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Dark theme
    #[default]
    Dark,

    /// Light theme
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

/// Handle for one in-flight assistant question
///
/// An answer is only recorded against the ticket that is still pending, so answers
/// for a product that has since been closed or reopened are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionTicket(u64);

/// Assistant state for the open product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantPanel {
    pending: Option<QuestionTicket>,
    answer: Option<String>,
}

impl AssistantPanel {
    /// Whether a question is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The last answer shown, if any.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }
}

/// Browsing session state
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    reviews: ReviewStore,
    selection: Selection,
    language: Language,
    theme: Theme,
    cart_count: u32,
    filter: RatingFilter,
    assistant: AssistantPanel,
    last_ticket: u64,
}

impl Storefront {
    /// Start a session over the given catalog and seeded reviews.
    pub fn new(catalog: Catalog, reviews: ReviewStore) -> Self {
        Self {
            catalog,
            reviews,
            selection: Selection::default(),
            language: Language::default(),
            theme: Theme::default(),
            cart_count: 0,
            filter: RatingFilter::default(),
            assistant: AssistantPanel::default(),
            last_ticket: 0,
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All reviews, newest first.
    pub fn reviews(&self) -> &ReviewStore {
        &self.reviews
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Number of purchases made this session.
    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    /// Rating filter for the open product's reviews.
    pub fn filter(&self) -> RatingFilter {
        self.filter
    }

    /// Assistant panel for the open product.
    pub fn assistant(&self) -> &AssistantPanel {
        &self.assistant
    }

    /// The open product, if any.
    pub fn selected(&self) -> Option<&Product> {
        self.selection
            .current()
            .and_then(|id| self.catalog.get(id))
    }

    /// Switch the display language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Open a product's detail view.
    ///
    /// Overlay state (review filter, assistant panel) starts fresh for every open.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Selection` when the product is not in the catalog.
    pub fn open(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        self.selection.open(&self.catalog, id)?;
        self.reset_overlay();

        Ok(())
    }

    /// Close the detail view.
    pub fn close(&mut self) -> Option<ProductId> {
        self.reset_overlay();
        self.selection.close()
    }

    /// Buy the open product: bump the cart counter and close the detail view.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::NothingSelected` when no product is open.
    pub fn buy(&mut self) -> Result<u32, StorefrontError> {
        if !self.selection.is_open() {
            return Err(StorefrontError::NothingSelected);
        }

        self.cart_count = self.cart_count.saturating_add(1);
        self.close();

        Ok(self.cart_count)
    }

    /// Submit a review for the open product, dated today.
    ///
    /// # Errors
    ///
    /// Returns a `StorefrontError` when no product is open or the review is invalid.
    pub fn submit_review(
        &mut self,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<ReviewId, StorefrontError> {
        self.submit_review_at(
            user_name,
            rating,
            comment,
            ReviewId::generate(),
            Zoned::now().date(),
        )
    }

    /// Submit a review for the open product with an explicit id and date.
    ///
    /// # Errors
    ///
    /// Returns a `StorefrontError` when no product is open or the review is invalid.
    pub fn submit_review_at(
        &mut self,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        id: ReviewId,
        date: Date,
    ) -> Result<ReviewId, StorefrontError> {
        let product_id = self
            .selection
            .current()
            .cloned()
            .ok_or(StorefrontError::NothingSelected)?;

        let submission = NewReview {
            product_id,
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
        };

        self.reviews.submit(submission, id.clone(), date)?;

        Ok(id)
    }

    /// Change the rating filter for the open product's reviews.
    pub fn set_filter(&mut self, filter: RatingFilter) {
        self.filter = filter;
    }

    /// Reviews visible for the open product under the current filter.
    pub fn visible_reviews(&self) -> Vec<&Review> {
        self.selection
            .current()
            .map(|id| visible_for(&self.reviews, id, self.filter))
            .unwrap_or_default()
    }

    /// Mark a question as in flight.
    ///
    /// Returns `None`, leaving state untouched, when no product is open or a
    /// question is already pending.
    pub fn begin_question(&mut self) -> Option<QuestionTicket> {
        if !self.selection.is_open() || self.assistant.is_busy() {
            return None;
        }

        self.last_ticket = self.last_ticket.wrapping_add(1);

        let ticket = QuestionTicket(self.last_ticket);

        self.assistant.pending = Some(ticket);
        self.assistant.answer = None;

        Some(ticket)
    }

    /// Record the answer to the question behind `ticket`.
    ///
    /// Returns `false` and drops the answer when the ticket is no longer pending,
    /// i.e. the product was closed or reopened while the question was in flight.
    pub fn finish_question(&mut self, ticket: QuestionTicket, answer: impl Into<String>) -> bool {
        if self.assistant.pending != Some(ticket) {
            return false;
        }

        self.assistant.pending = None;
        self.assistant.answer = Some(answer.into());

        true
    }

    fn reset_overlay(&mut self) {
        self.filter = RatingFilter::default();
        self.assistant = AssistantPanel::default();
    }
}

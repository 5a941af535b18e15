//! Reviews
//!
//! Customer reviews, the append-only store that holds them, and the rating filter
//! used to derive the visible subset for a product.

use std::fmt;

use jiff::civil::Date;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::ProductId;

pub mod filter;
pub mod store;

pub use filter::{RatingFilter, visible_for};
pub use store::ReviewStore;

/// Errors raised while validating or storing reviews.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The reviewer name is blank.
    #[error("reviewer name cannot be empty")]
    EmptyUserName,

    /// The review comment is blank.
    #[error("review comment cannot be empty")]
    EmptyComment,

    /// The rating is outside `1..=5`.
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// The filter is neither `all` nor a star rating.
    #[error("invalid rating filter: {0}")]
    InvalidFilter(String),

    /// Another review already uses this id.
    #[error("duplicate review id: {0}")]
    DuplicateId(ReviewId),
}

/// Review identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewId(String);

impl ReviewId {
    /// Create a review identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a time-ordered identifier for a fresh submission.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReviewId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Star rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;

    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidRating` when `stars` is outside `1..=5`.
    pub fn new(stars: u8) -> Result<Self, ReviewError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ReviewError::InvalidRating(stars))
        }
    }

    /// Number of stars.
    pub fn stars(self) -> u8 {
        self.0
    }

    /// Every rating from highest to lowest.
    pub fn descending() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Self)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Visible without a moderation badge.
    #[default]
    Approved,

    /// Awaiting moderation.
    Pending,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Approved => f.write_str("approved"),
            ReviewStatus::Pending => f.write_str("pending"),
        }
    }
}

/// Review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Unique review identifier
    pub id: ReviewId,

    /// Reviewed product; not checked against the catalog
    pub product_id: ProductId,

    /// Reviewer display name
    pub user_name: String,

    /// Star rating
    pub rating: Rating,

    /// Review text
    pub comment: String,

    /// Submission date
    pub date: Date,

    /// Moderation status
    pub status: ReviewStatus,
}

/// Unvalidated review submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Reviewed product
    pub product_id: ProductId,

    /// Reviewer display name
    pub user_name: String,

    /// Raw star rating
    pub rating: u8,

    /// Review text
    pub comment: String,
}

impl NewReview {
    /// Validate the submission into a pending review.
    ///
    /// # Errors
    ///
    /// Returns a `ReviewError` when the name or comment is blank or the rating is out
    /// of range.
    pub fn into_review(self, id: ReviewId, date: Date) -> Result<Review, ReviewError> {
        let rating = Rating::new(self.rating)?;

        let review = Review {
            id,
            product_id: self.product_id,
            user_name: self.user_name,
            rating,
            comment: self.comment,
            date,
            status: ReviewStatus::Pending,
        };

        validate_text(&review)?;

        Ok(review)
    }
}

pub(crate) fn validate_text(review: &Review) -> Result<(), ReviewError> {
    if review.user_name.trim().is_empty() {
        return Err(ReviewError::EmptyUserName);
    }

    if review.comment.trim().is_empty() {
        return Err(ReviewError::EmptyComment);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    fn submission(user_name: &str, rating: u8, comment: &str) -> NewReview {
        NewReview {
            product_id: ProductId::from("p1"),
            user_name: user_name.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn rating_accepts_one_to_five() -> TestResult {
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars)?.stars(), stars);
        }

        Ok(())
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(ReviewError::InvalidRating(0)));
        assert_eq!(Rating::try_from(6), Err(ReviewError::InvalidRating(6)));
    }

    #[test]
    fn rating_descending_lists_five_to_one() {
        let stars: Vec<u8> = Rating::descending().map(Rating::stars).collect();

        assert_eq!(stars, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn into_review_is_pending() -> TestResult {
        let review = submission("Tester", 3, "ok").into_review(
            ReviewId::from("x"),
            date(2024, 5, 1),
        )?;

        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.rating.stars(), 3);
        assert_eq!(review.date, date(2024, 5, 1));

        Ok(())
    }

    #[test]
    fn into_review_rejects_blank_fields() {
        let id = ReviewId::from("x");
        let day = date(2024, 5, 1);

        assert_eq!(
            submission("   ", 3, "ok").into_review(id.clone(), day),
            Err(ReviewError::EmptyUserName)
        );
        assert_eq!(
            submission("Tester", 3, "\n\t ").into_review(id.clone(), day),
            Err(ReviewError::EmptyComment)
        );
        assert_eq!(
            submission("Tester", 9, "ok").into_review(id, day),
            Err(ReviewError::InvalidRating(9))
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = ReviewId::generate();
        let b = ReviewId::generate();

        assert_ne!(a, b);
    }
}

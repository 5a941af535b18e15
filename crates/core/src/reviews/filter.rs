//! Review Filter

use std::{fmt, str::FromStr};

use crate::{
    catalog::ProductId,
    reviews::{Rating, Review, ReviewError, ReviewStore},
};

/// Star-rating filter applied to a product's reviews
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingFilter {
    /// Every rating.
    #[default]
    All,

    /// Exactly this rating.
    Stars(Rating),
}

impl RatingFilter {
    /// Check whether a rating passes the filter.
    pub fn matches(self, rating: Rating) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Stars(stars) => stars == rating,
        }
    }
}

impl From<Rating> for RatingFilter {
    fn from(value: Rating) -> Self {
        RatingFilter::Stars(value)
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str("all"),
            RatingFilter::Stars(rating) => write!(f, "{rating}"),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(RatingFilter::All);
        }

        let stars = trimmed
            .parse::<u8>()
            .map_err(|_err| ReviewError::InvalidFilter(trimmed.to_string()))?;

        Ok(RatingFilter::Stars(Rating::new(stars)?))
    }
}

/// Reviews of `product` that pass `filter`, in store order (newest first).
///
/// Pending reviews are included; callers mark them rather than hide them.
pub fn visible_for<'a>(
    store: &'a ReviewStore,
    product: &ProductId,
    filter: RatingFilter,
) -> Vec<&'a Review> {
    store
        .iter()
        .filter(|review| review.product_id == *product && filter.matches(review.rating))
        .collect()
}

//! Review Fixtures

use jiff::civil::Date;
use serde::Deserialize;

use crate::{
    catalog::ProductId,
    fixtures::FixtureError,
    reviews::{Rating, Review, ReviewId, ReviewStatus},
};

/// Wrapper for reviews in YAML
#[derive(Debug, Deserialize)]
pub struct ReviewsFixture {
    /// Reviews in store order (newest first)
    pub reviews: Vec<ReviewFixture>,
}

/// Review Fixture
#[derive(Debug, Deserialize)]
pub struct ReviewFixture {
    /// Review id
    pub id: String,

    /// Reviewed product id
    pub product: String,

    /// Reviewer name
    pub user_name: String,

    /// Star rating
    pub rating: u8,

    /// Review text
    pub comment: String,

    /// ISO 8601 calendar date (e.g., "2024-03-15")
    pub date: String,

    /// Moderation status, approved when omitted
    #[serde(default)]
    pub status: ReviewStatus,
}

impl TryFrom<ReviewFixture> for Review {
    type Error = FixtureError;

    fn try_from(fixture: ReviewFixture) -> Result<Self, Self::Error> {
        let date = fixture
            .date
            .parse::<Date>()
            .map_err(|_err| FixtureError::InvalidDate(fixture.date.clone()))?;

        Ok(Review {
            id: ReviewId::new(fixture.id),
            product_id: ProductId::from(fixture.product),
            user_name: fixture.user_name,
            rating: Rating::new(fixture.rating)?,
            comment: fixture.comment,
            date,
            status: fixture.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::reviews::ReviewError;

    use super::*;

    fn fixture(rating: u8, date: &str) -> ReviewFixture {
        ReviewFixture {
            id: "r1".to_string(),
            product: "p1".to_string(),
            user_name: "NightOwl".to_string(),
            rating,
            comment: "Bright.".to_string(),
            date: date.to_string(),
            status: ReviewStatus::Pending,
        }
    }

    #[test]
    fn converts_valid_fixture() -> Result<(), FixtureError> {
        let review = Review::try_from(fixture(4, "2024-03-10"))?;

        assert_eq!(review.rating.stars(), 4);
        assert_eq!(review.date, jiff::civil::date(2024, 3, 10));
        assert_eq!(review.status, ReviewStatus::Pending);

        Ok(())
    }

    #[test]
    fn rejects_bad_date() {
        let result = Review::try_from(fixture(4, "March 10th"));

        assert!(matches!(result, Err(FixtureError::InvalidDate(date)) if date == "March 10th"));
    }

    #[test]
    fn rejects_bad_rating() {
        let result = Review::try_from(fixture(7, "2024-03-10"));

        assert!(matches!(
            result,
            Err(FixtureError::Reviews(ReviewError::InvalidRating(7)))
        ));
    }

    #[test]
    fn status_defaults_to_approved() -> Result<(), FixtureError> {
        let parsed: ReviewFixture = serde_norway::from_str(
            "{ id: r2, product: p2, user_name: A, rating: 5, comment: Nice, date: '2024-02-28' }",
        )?;

        assert_eq!(parsed.status, ReviewStatus::Approved);

        Ok(())
    }
}

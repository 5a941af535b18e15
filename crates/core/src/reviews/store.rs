//! Review Store

use std::collections::VecDeque;

use jiff::civil::Date;
use rustc_hash::FxHashSet;

use crate::reviews::{NewReview, Review, ReviewError, ReviewId, ReviewStatus, validate_text};

/// Append-only review collection, newest first
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: VecDeque<Review>,
    ids: FxHashSet<ReviewId>,
}

impl ReviewStore {
    /// Create a store holding the seed reviews exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::DuplicateId` when two seed reviews share an id.
    pub fn new(seed: impl IntoIterator<Item = Review>) -> Result<Self, ReviewError> {
        let mut store = Self::default();

        for review in seed {
            store.claim_id(&review.id)?;
            store.reviews.push_back(review);
        }

        Ok(store)
    }

    /// Insert a review at the front of the store.
    ///
    /// The status is always reset to pending, whatever the caller supplied.
    ///
    /// # Errors
    ///
    /// Returns a `ReviewError` when the name or comment is blank, or the id is
    /// already taken. Nothing is inserted on error.
    pub fn add(&mut self, mut review: Review) -> Result<(), ReviewError> {
        validate_text(&review)?;
        self.claim_id(&review.id)?;

        review.status = ReviewStatus::Pending;
        self.reviews.push_front(review);

        Ok(())
    }

    /// Validate a raw submission and insert it.
    ///
    /// # Errors
    ///
    /// Returns a `ReviewError` when validation fails or the id is already taken.
    pub fn submit(
        &mut self,
        submission: NewReview,
        id: ReviewId,
        date: Date,
    ) -> Result<(), ReviewError> {
        let review = submission.into_review(id, date)?;

        self.add(review)
    }

    /// Look up a review by id.
    pub fn get(&self, id: &ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == *id)
    }

    /// Iterate reviews, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Review> {
        self.reviews.iter()
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    fn claim_id(&mut self, id: &ReviewId) -> Result<(), ReviewError> {
        if self.ids.insert(id.clone()) {
            Ok(())
        } else {
            Err(ReviewError::DuplicateId(id.clone()))
        }
    }
}

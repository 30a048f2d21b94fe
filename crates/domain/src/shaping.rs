//! Storefront review listing shape.
//!
//! Product-scoped reviews are filtered down to published ones. When nothing
//! is left, the caller substitutes the shop's general review pool (unfiltered)
//! and marks the response with `is_general_reviews`. Either way every record
//! is sanitized through `Review::from`, one output review per input record.

use serde::Serialize;

use crate::entities::{RawReview, Review};

/// Keeps only published reviews, preserving their order.
pub fn published_only(reviews: Vec<RawReview>) -> Vec<RawReview> {
    reviews.into_iter().filter(|review| review.published).collect()
}

/// Listing metadata for the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapingConfig {
    pub is_general_reviews: bool,
}

/// Review listing as returned to the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedResponse {
    pub config: ShapingConfig,
    pub reviews: Vec<Review>,
}

impl ShapedResponse {
    /// Listing built from a product's own (already filtered) reviews.
    pub fn product(reviews: Vec<RawReview>) -> Self {
        Self::sanitized(reviews, false)
    }

    /// Listing built from the general review pool.
    pub fn general(reviews: Vec<RawReview>) -> Self {
        Self::sanitized(reviews, true)
    }

    pub fn is_general_reviews(&self) -> bool {
        self.config.is_general_reviews
    }

    fn sanitized(reviews: Vec<RawReview>, is_general_reviews: bool) -> Self {
        Self {
            config: ShapingConfig { is_general_reviews },
            reviews: reviews.into_iter().map(Review::from).collect(),
        }
    }
}

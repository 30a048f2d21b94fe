//! Per-rating review counts for a product.

use std::sync::Arc;

use reviewproxy_domain::{Rating, RatingSummary};

use crate::infrastructure::ports::{ReviewsPort, UpstreamError};

/// Builds a product's rating summary from six upstream count queries.
///
/// The total is fetched first, then ratings 1 through 5. Calls are issued one
/// after another; the first failure aborts the summary.
pub struct SummarizeRatings {
    reviews: Arc<dyn ReviewsPort>,
}

impl SummarizeRatings {
    pub fn new(reviews: Arc<dyn ReviewsPort>) -> Self {
        Self { reviews }
    }

    pub async fn execute(&self, product_id: String) -> Result<RatingSummary, UpstreamError> {
        let total = self.reviews.count_reviews(product_id.clone(), None).await?;
        let mut summary = RatingSummary::with_total(total);
        tracing::debug!(product_id = %product_id, count = total, "Fetched total review count");

        for rating in Rating::all() {
            let count = self
                .reviews
                .count_reviews(product_id.clone(), Some(rating))
                .await?;
            summary.set_score(rating, count);
        }

        Ok(summary)
    }
}

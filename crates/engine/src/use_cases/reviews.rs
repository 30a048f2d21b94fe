//! Review listing with fallback to the shop's general reviews.

use std::sync::Arc;

use reviewproxy_domain::{published_only, Pagination, ShapedResponse};

use crate::infrastructure::ports::{ReviewQuery, ReviewsPort, UpstreamError};

/// Lists a product's published reviews in storefront shape.
///
/// When the product has no published review on the requested page, the
/// general pool is fetched with the same pagination and returned unfiltered,
/// flagged with `is_general_reviews`. The second call only happens after the
/// first one has completed. If it fails, no partial listing is returned.
pub struct ListReviews {
    reviews: Arc<dyn ReviewsPort>,
}

impl ListReviews {
    pub fn new(reviews: Arc<dyn ReviewsPort>) -> Self {
        Self { reviews }
    }

    pub async fn execute(
        &self,
        internal_id: String,
        pagination: Pagination,
    ) -> Result<ShapedResponse, UpstreamError> {
        let scoped = self
            .reviews
            .list_reviews(ReviewQuery::for_product(internal_id.clone(), pagination.clone()))
            .await?;

        let published = published_only(scoped);
        if !published.is_empty() {
            return Ok(ShapedResponse::product(published));
        }

        tracing::info!(
            internal_id = %internal_id,
            "No published reviews for product, falling back to general reviews"
        );
        let general = self
            .reviews
            .list_reviews(ReviewQuery::general(pagination))
            .await?;

        Ok(ShapedResponse::general(general))
    }
}

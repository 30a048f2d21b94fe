//! Product lookup by storefront id.

use std::sync::Arc;

use crate::infrastructure::ports::{ReviewsPort, UpstreamError};

/// Proxies a product lookup; the upstream payload is returned as-is.
pub struct LookupProduct {
    reviews: Arc<dyn ReviewsPort>,
}

impl LookupProduct {
    pub fn new(reviews: Arc<dyn ReviewsPort>) -> Self {
        Self { reviews }
    }

    pub async fn execute(&self, product_id: String) -> Result<serde_json::Value, UpstreamError> {
        tracing::debug!(product_id = %product_id, "Looking up product");
        self.reviews.get_product(product_id).await
    }
}

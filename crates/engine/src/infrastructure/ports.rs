//! Port traits for infrastructure boundaries.
//!
//! The upstream reviews service is the only external dependency. It sits
//! behind `ReviewsPort` so use cases and HTTP handlers can be tested against
//! mocks instead of a live Judge.me shop.

use async_trait::async_trait;
use reviewproxy_domain::{Pagination, RawReview, Rating};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("Judge.me API error: {reason}")]
    Status { status: u16, reason: String },
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Query Types
// =============================================================================

/// Review listing query. Without an `internal_id` the shop's whole review
/// pool is listed (the "general" reviews).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub internal_id: Option<String>,
    pub pagination: Pagination,
}

impl ReviewQuery {
    pub fn for_product(internal_id: impl Into<String>, pagination: Pagination) -> Self {
        Self {
            internal_id: Some(internal_id.into()),
            pagination,
        }
    }

    pub fn general(pagination: Pagination) -> Self {
        Self {
            internal_id: None,
            pagination,
        }
    }

    pub fn is_general(&self) -> bool {
        self.internal_id.is_none()
    }
}

// =============================================================================
// Upstream Reviews Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsPort: Send + Sync {
    /// Look up a product by its storefront (external) id. The upstream JSON is
    /// returned untouched.
    async fn get_product(&self, external_id: String) -> Result<serde_json::Value, UpstreamError>;

    /// Count a product's reviews, optionally restricted to one rating.
    async fn count_reviews(
        &self,
        product_id: String,
        rating: Option<Rating>,
    ) -> Result<u64, UpstreamError>;

    /// List one page of reviews.
    async fn list_reviews(&self, query: ReviewQuery) -> Result<Vec<RawReview>, UpstreamError>;
}

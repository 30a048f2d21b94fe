//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::ReviewsPort;
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state. Built once at startup from the
/// configured upstream port; holds no per-request state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub product: use_cases::LookupProduct,
    pub ratings: use_cases::SummarizeRatings,
    pub reviews: use_cases::ListReviews,
}

impl App {
    pub fn new(reviews: Arc<dyn ReviewsPort>) -> Self {
        Self {
            use_cases: UseCases {
                product: use_cases::LookupProduct::new(reviews.clone()),
                ratings: use_cases::SummarizeRatings::new(reviews.clone()),
                reviews: use_cases::ListReviews::new(reviews),
            },
        }
    }
}

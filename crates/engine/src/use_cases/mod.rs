//! Use cases - one per storefront endpoint.
//!
//! Each use case orchestrates calls to the upstream reviews port and applies
//! the domain transformations. HTTP concerns stay in `api`.

pub mod product;
pub mod ratings;
pub mod reviews;

pub use product::LookupProduct;
pub use ratings::SummarizeRatings;
pub use reviews::ListReviews;

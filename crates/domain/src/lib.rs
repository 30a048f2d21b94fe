//! Review proxy domain.
//!
//! Pure types and transformations for the storefront reviews proxy:
//! raw upstream review records, their sanitized storefront form, reviewer
//! display names, rating summaries, and the shaped listing response.
//! Nothing in here performs I/O.

pub mod entities;
pub mod error;
pub mod shaping;
pub mod value_objects;

pub use entities::{
    Picture, PictureUrls, RawPicture, RawReview, RawReviewer, Review, ReviewerBadge,
    Verification,
};
pub use error::DomainError;
pub use shaping::{published_only, ShapedResponse, ShapingConfig};
pub use value_objects::{format_display_name, Pagination, Rating, RatingSummary, ReviewerName};

//! Value objects - Immutable objects defined by their attributes

mod pagination;
mod rating;
mod reviewer_name;

pub use pagination::Pagination;
pub use rating::{Rating, RatingSummary};
pub use reviewer_name::{format_display_name, ReviewerName};

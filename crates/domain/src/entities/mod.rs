//! Domain entities - review records as received upstream and as shown in the storefront

mod review;

pub use review::{
    Picture, PictureUrls, RawPicture, RawReview, RawReviewer, Review, ReviewerBadge, Verification,
};

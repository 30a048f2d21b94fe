//! Review records.
//!
//! `RawReview` mirrors what the upstream reviews API returns. Unknown upstream
//! fields are ignored on deserialization. `Review` is the sanitized form sent
//! to the storefront: the reviewer is reduced to a display name and pictures
//! to their original-size URL.

use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::ReviewerName;

/// How a review was verified.
///
/// The upstream API reports either a plain flag or a verification source
/// such as `"buyer"`; both are passed through as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verification {
    Flag(bool),
    Source(String),
}

// =============================================================================
// Upstream records
// =============================================================================

/// A review as returned by the upstream reviews API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReview {
    pub id: u64,
    pub rating: u8,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub verified: Option<Verification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(default)]
    pub reviewer: Option<RawReviewer>,
    #[serde(default)]
    pub pictures: Option<Vec<RawPicture>>,
}

/// Reviewer details as returned upstream. Only the name survives sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawReviewer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A picture attached to an upstream review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPicture {
    #[serde(default)]
    pub urls: Option<PictureUrls>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(default)]
    pub title: Option<String>,
}

/// Size variants of an upstream picture. Only the original size is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PictureUrls {
    #[serde(default)]
    pub original: Option<String>,
}

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Storefront records
// =============================================================================

/// A sanitized review, safe to hand to the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: u64,
    pub rating: u8,
    pub created_at: Option<String>,
    pub featured: bool,
    pub title: Option<String>,
    pub body: Option<String>,
    pub verified: Option<Verification>,
    pub reviewer: ReviewerBadge,
    pub pictures: Vec<Picture>,
}

/// Public reviewer details: the display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewerBadge {
    pub name: ReviewerName,
}

/// A sanitized review picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Picture {
    pub original: Option<String>,
    pub hidden: bool,
    pub title: Option<String>,
}

impl From<RawPicture> for Picture {
    fn from(raw: RawPicture) -> Self {
        Self {
            original: raw.urls.and_then(|urls| urls.original),
            hidden: raw.hidden,
            title: raw.title,
        }
    }
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        let name = raw
            .reviewer
            .as_ref()
            .and_then(|reviewer| reviewer.name.as_deref())
            .into();

        Self {
            id: raw.id,
            rating: raw.rating,
            created_at: raw.created_at,
            featured: raw.featured,
            title: raw.title,
            body: raw.body,
            verified: raw.verified,
            reviewer: ReviewerBadge { name },
            pictures: raw
                .pictures
                .unwrap_or_default()
                .into_iter()
                .map(Picture::from)
                .collect(),
        }
    }
}

//! Star ratings and per-rating review counts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a validated rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `stars` is outside 1..=5.
    pub fn new(stars: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&stars) {
            return Err(DomainError::validation(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                stars
            )));
        }
        Ok(Self(stars))
    }

    /// All ratings in ascending order.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total review count for a product plus the count for each star rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub count: u64,
    pub score_1: u64,
    pub score_2: u64,
    pub score_3: u64,
    pub score_4: u64,
    pub score_5: u64,
}

impl RatingSummary {
    /// Summary with the given total and all per-rating counts at zero.
    pub fn with_total(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Record the number of reviews carrying `rating`.
    pub fn set_score(&mut self, rating: Rating, count: u64) {
        *self.score_mut(rating) = count;
    }

    /// Number of reviews carrying `rating`.
    pub fn score(&self, rating: Rating) -> u64 {
        match rating.0 {
            1 => self.score_1,
            2 => self.score_2,
            3 => self.score_3,
            4 => self.score_4,
            _ => self.score_5,
        }
    }

    fn score_mut(&mut self, rating: Rating) -> &mut u64 {
        match rating.0 {
            1 => &mut self.score_1,
            2 => &mut self.score_2,
            3 => &mut self.score_3,
            4 => &mut self.score_4,
            _ => &mut self.score_5,
        }
    }
}

//! Caller-supplied pagination

use serde::{Deserialize, Serialize};

/// Page selection passed through to the upstream API untouched.
///
/// Values are kept as the caller sent them; the upstream service owns their
/// interpretation. Blank values are turned away at the HTTP edge, together
/// with the other required parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    per_page: String,
    page: String,
}

impl Pagination {
    pub fn new(per_page: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            per_page: per_page.into(),
            page: page.into(),
        }
    }

    pub fn per_page(&self) -> &str {
        &self.per_page
    }

    pub fn page(&self) -> &str {
        &self.page
    }
}

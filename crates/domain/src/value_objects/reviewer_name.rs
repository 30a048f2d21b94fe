//! Reviewer display names
//!
//! Storefronts never show a reviewer's full name. The display form keeps the
//! first name and reduces the last name to its initial:
//! - `"John Smith"` becomes `"John S."`
//! - `"Mary Jane Watson"` becomes `"Mary W."` (middle names are dropped)
//! - `"Madonna"` stays `"Madonna"`

use serde::Serialize;
use std::fmt;

/// Formats a full reviewer name for public display.
///
/// Tokens are split on any whitespace. Names without any token (empty or
/// whitespace-only input) format to the empty string.
pub fn format_display_name(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };

    match tokens.last() {
        None => first.to_string(),
        Some(last) => {
            let initial: String = last.chars().take(1).flat_map(char::to_uppercase).collect();
            format!("{first} {initial}.")
        }
    }
}

/// A reviewer name already reduced to its display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReviewerName(String);

impl ReviewerName {
    /// Builds the display name from a reviewer's full name.
    pub fn from_full_name(full_name: &str) -> Self {
        Self(format_display_name(full_name))
    }

    /// Display name for a reviewer whose upstream record carries no name.
    pub fn anonymous() -> Self {
        Self(String::new())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Option<&str>> for ReviewerName {
    fn from(full_name: Option<&str>) -> Self {
        full_name.map_or_else(Self::anonymous, Self::from_full_name)
    }
}

impl fmt::Display for ReviewerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

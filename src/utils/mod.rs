//! Common utilities and helper functions
//!
//! Required-field checks shared by every form, and text helpers used when
//! rendering listings.

use crate::error::{Error, Result};

/// Trimmed value of a required form field, or a validation error naming it.
pub fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Like [`require`] for optional fields: blank collapses to `None`.
pub fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Reject values below `min`
pub fn require_at_least(field: &str, value: i64, min: i64) -> Result<i64> {
    if value < min {
        return Err(Error::validation(format!("{field} must be at least {min}")));
    }
    Ok(value)
}

/// Truncate text to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

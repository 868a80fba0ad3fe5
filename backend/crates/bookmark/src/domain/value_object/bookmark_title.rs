//! Bookmark Title Value Object

use derive_more::Display;

use crate::error::{BookmarkError, BookmarkResult};

/// Maximum title length (in characters)
pub const BOOKMARK_TITLE_MAX_LENGTH: usize = 255;

/// Trimmed, non-empty title
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    pub fn new(raw: impl AsRef<str>) -> BookmarkResult<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(BookmarkError::Validation(
                "title: Title cannot be empty".to_string(),
            ));
        }

        let char_count = trimmed.chars().count();
        if char_count > BOOKMARK_TITLE_MAX_LENGTH {
            return Err(BookmarkError::Validation(format!(
                "title: Title must be at most {} characters (got {})",
                BOOKMARK_TITLE_MAX_LENGTH, char_count
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//! Bookmark URL Value Object
//!
//! Absolute `http`/`https` URL with a host, stored in the normalized form
//! produced by the `url` crate (e.g. `https://e.com` becomes `https://e.com/`).

use derive_more::Display;
use url::Url;

use crate::error::{BookmarkError, BookmarkResult};

/// Maximum accepted URL length (in bytes)
pub const BOOKMARK_URL_MAX_LENGTH: usize = 2083;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct BookmarkUrl(String);

impl BookmarkUrl {
    pub fn new(raw: impl AsRef<str>) -> BookmarkResult<Self> {
        let raw = raw.as_ref().trim();

        if raw.is_empty() {
            return Err(invalid("URL cannot be empty"));
        }
        if raw.len() > BOOKMARK_URL_MAX_LENGTH {
            return Err(invalid(format!(
                "URL must be at most {} characters",
                BOOKMARK_URL_MAX_LENGTH
            )));
        }

        let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("URL scheme must be http or https"));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("URL must have a host"));
        }

        Ok(Self(parsed.into()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(message: impl Into<String>) -> BookmarkError {
    BookmarkError::Validation(format!("url: {}", message.into()))
}

//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::bookmark::Bookmark;

/// Create request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update request
///
/// For `title`/`url`, `null` and absent both mean "unchanged". For
/// `description`, absent means unchanged and `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

/// Wrap any present value (including `null`) in `Some`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Public bookmark representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.get(),
            title: bookmark.title.as_str().to_string(),
            url: bookmark.url.as_str().to_string(),
            description: bookmark.description.clone(),
            user_id: bookmark.user_id.get(),
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

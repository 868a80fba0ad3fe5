//! Bookmark Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookmarkId, UserId};

use crate::domain::value_object::{bookmark_title::BookmarkTitle, bookmark_url::BookmarkUrl};

/// Bookmark entity, always owned by exactly one user
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: Option<String>,
    /// Owner
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    /// `None` until the first modification
    pub updated_at: Option<DateTime<Utc>>,
}

impl Bookmark {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Apply a set of changes; `updated_at` moves even when nothing changed
    pub fn apply(&mut self, changes: BookmarkChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(url) = changes.url {
            self.url = url;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = Some(now);
    }
}

/// A bookmark not yet persisted
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: BookmarkTitle,
    pub url: BookmarkUrl,
    pub description: Option<String>,
    pub user_id: UserId,
}

/// Validated partial update
///
/// `description`: `None` = unchanged, `Some(None)` = clear, `Some(Some(_))` = set.
#[derive(Debug, Clone, Default)]
pub struct BookmarkChanges {
    pub title: Option<BookmarkTitle>,
    pub url: Option<BookmarkUrl>,
    pub description: Option<Option<String>>,
}

//! Update Bookmark Use Case
//!
//! Partial update; fields not provided keep their value.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{BookmarkId, UserId};

use crate::domain::entity::bookmark::{Bookmark, BookmarkChanges};
use crate::domain::repository::BookmarkRepository;
use crate::domain::value_object::{bookmark_title::BookmarkTitle, bookmark_url::BookmarkUrl};
use crate::error::{BookmarkError, BookmarkResult};

/// Update input
///
/// `description`: `None` = unchanged, `Some(None)` = clear.
#[derive(Default)]
pub struct UpdateBookmarkInput {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<Option<String>>,
}

pub struct UpdateBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
}

impl<B> UpdateBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>) -> Self {
        Self { bookmark_repo }
    }

    pub async fn execute(
        &self,
        owner: UserId,
        id: BookmarkId,
        input: UpdateBookmarkInput,
    ) -> BookmarkResult<Bookmark> {
        let mut bookmark = self
            .bookmark_repo
            .find_by_id(owner, id)
            .await?
            .ok_or(BookmarkError::NotFound)?;

        let changes = BookmarkChanges {
            title: input.title.map(BookmarkTitle::new).transpose()?,
            url: input.url.map(BookmarkUrl::new).transpose()?,
            description: input.description,
        };

        bookmark.apply(changes, Utc::now());

        // Deleted between the read and the write
        if !self.bookmark_repo.update(&bookmark).await? {
            return Err(BookmarkError::NotFound);
        }

        tracing::info!(bookmark_id = %id, user_id = %owner, "Bookmark updated");

        Ok(bookmark)
    }
}

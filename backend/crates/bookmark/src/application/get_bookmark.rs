//! Get Bookmark Use Case

use std::sync::Arc;

use kernel::id::{BookmarkId, UserId};

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::repository::BookmarkRepository;
use crate::error::{BookmarkError, BookmarkResult};

pub struct GetBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
}

impl<B> GetBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>) -> Self {
        Self { bookmark_repo }
    }

    /// `NotFound` when absent or owned by someone else
    pub async fn execute(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<Bookmark> {
        self.bookmark_repo
            .find_by_id(owner, id)
            .await?
            .ok_or(BookmarkError::NotFound)
    }
}

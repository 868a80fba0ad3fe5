//! Create Bookmark Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::bookmark::{Bookmark, NewBookmark};
use crate::domain::repository::BookmarkRepository;
use crate::domain::value_object::{bookmark_title::BookmarkTitle, bookmark_url::BookmarkUrl};
use crate::error::BookmarkResult;

pub struct CreateBookmarkInput {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

pub struct CreateBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
}

impl<B> CreateBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>) -> Self {
        Self { bookmark_repo }
    }

    pub async fn execute(
        &self,
        owner: UserId,
        input: CreateBookmarkInput,
    ) -> BookmarkResult<Bookmark> {
        let new_bookmark = NewBookmark {
            title: BookmarkTitle::new(&input.title)?,
            url: BookmarkUrl::new(&input.url)?,
            description: input.description,
            user_id: owner,
        };

        let bookmark = self.bookmark_repo.create(&new_bookmark).await?;

        tracing::info!(
            bookmark_id = %bookmark.id,
            user_id = %owner,
            "Bookmark created"
        );

        Ok(bookmark)
    }
}

//! In-memory `BookmarkRepository` for use case tests

use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::{BookmarkId, UserId};

use crate::application::{CreateBookmarkInput, CreateBookmarkUseCase};
use crate::domain::entity::bookmark::{Bookmark, NewBookmark};
use crate::domain::repository::BookmarkRepository;
use crate::error::BookmarkResult;

#[derive(Clone, Default)]
pub struct MemoryBookmarkRepository {
    bookmarks: Arc<Mutex<Vec<Bookmark>>>,
}

impl MemoryBookmarkRepository {
    pub fn len(&self) -> usize {
        self.bookmarks.lock().unwrap().len()
    }
}

impl BookmarkRepository for MemoryBookmarkRepository {
    async fn create(&self, bookmark: &NewBookmark) -> BookmarkResult<Bookmark> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let id = bookmarks.iter().map(|b| b.id.get()).max().unwrap_or(0) + 1;
        let created = Bookmark {
            id: BookmarkId::new(id),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            user_id: bookmark.user_id,
            created_at: Utc::now(),
            updated_at: None,
        };
        bookmarks.push(created.clone());
        Ok(created)
    }

    async fn list_by_owner(&self, owner: UserId) -> BookmarkResult<Vec<Bookmark>> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .filter(|b| b.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<Option<Bookmark>> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .find(|b| b.id == id && b.is_owned_by(owner))
            .cloned())
    }

    async fn update(&self, bookmark: &Bookmark) -> BookmarkResult<bool> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        match bookmarks
            .iter_mut()
            .find(|b| b.id == bookmark.id && b.is_owned_by(bookmark.user_id))
        {
            Some(slot) => {
                *slot = bookmark.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<bool> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(b.id == id && b.is_owned_by(owner)));
        Ok(bookmarks.len() != before)
    }
}

/// Create a bookmark through the use case
pub async fn seed(repo: &Arc<MemoryBookmarkRepository>, owner: UserId, title: &str) -> Bookmark {
    CreateBookmarkUseCase::new(repo.clone())
        .execute(
            owner,
            CreateBookmarkInput {
                title: title.to_string(),
                url: "https://e.com".to_string(),
                description: Some("d".to_string()),
            },
        )
        .await
        .unwrap()
}

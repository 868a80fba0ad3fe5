//! Repository Traits
//!
//! Every read and write is filtered by owner; a row owned by someone else
//! behaves exactly like a missing row.

use kernel::id::{BookmarkId, UserId};

use crate::domain::entity::bookmark::{Bookmark, NewBookmark};
use crate::error::BookmarkResult;

/// Bookmark repository trait
#[trait_variant::make(BookmarkRepository: Send)]
pub trait LocalBookmarkRepository {
    /// Insert; the store assigns id and `created_at`
    async fn create(&self, bookmark: &NewBookmark) -> BookmarkResult<Bookmark>;

    /// All bookmarks of `owner`, ordered by id
    async fn list_by_owner(&self, owner: UserId) -> BookmarkResult<Vec<Bookmark>>;

    /// Find by id within `owner`'s bookmarks
    async fn find_by_id(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<Option<Bookmark>>;

    /// Persist title, url, description and `updated_at`
    ///
    /// Returns `false` when no row with that id and owner exists.
    async fn update(&self, bookmark: &Bookmark) -> BookmarkResult<bool>;

    /// Returns `false` when no row with that id and owner exists
    async fn delete(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<bool>;
}

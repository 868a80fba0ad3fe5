//! List Bookmarks Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::repository::BookmarkRepository;
use crate::error::BookmarkResult;

pub struct ListBookmarksUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
}

impl<B> ListBookmarksUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>) -> Self {
        Self { bookmark_repo }
    }

    pub async fn execute(&self, owner: UserId) -> BookmarkResult<Vec<Bookmark>> {
        self.bookmark_repo.list_by_owner(owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryBookmarkRepository, seed};

    #[tokio::test]
    async fn test_list_only_returns_own_bookmarks_in_id_order() {
        let repo = Arc::new(MemoryBookmarkRepository::default());
        let first = seed(&repo, UserId::new(1), "one").await;
        seed(&repo, UserId::new(2), "other").await;
        let second = seed(&repo, UserId::new(1), "two").await;

        let listed = ListBookmarksUseCase::new(repo)
            .execute(UserId::new(1))
            .await
            .unwrap();

        let ids: Vec<_> = listed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}

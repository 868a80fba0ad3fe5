//! Delete Bookmark Use Case

use std::sync::Arc;

use kernel::id::{BookmarkId, UserId};

use crate::domain::repository::BookmarkRepository;
use crate::error::{BookmarkError, BookmarkResult};

pub struct DeleteBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
}

impl<B> DeleteBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>) -> Self {
        Self { bookmark_repo }
    }

    pub async fn execute(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<()> {
        if !self.bookmark_repo.delete(owner, id).await? {
            return Err(BookmarkError::NotFound);
        }

        tracing::info!(bookmark_id = %id, user_id = %owner, "Bookmark deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryBookmarkRepository, seed};

    #[tokio::test]
    async fn test_delete_is_owner_scoped() {
        let repo = Arc::new(MemoryBookmarkRepository::default());
        let mine = seed(&repo, UserId::new(1), "T").await;
        let delete = DeleteBookmarkUseCase::new(repo.clone());

        assert!(matches!(
            delete.execute(UserId::new(2), mine.id).await,
            Err(BookmarkError::NotFound)
        ));
        assert_eq!(repo.len(), 1);

        delete.execute(UserId::new(1), mine.id).await.unwrap();
        assert_eq!(repo.len(), 0);

        assert!(matches!(
            delete.execute(UserId::new(1), mine.id).await,
            Err(BookmarkError::NotFound)
        ));
    }
}

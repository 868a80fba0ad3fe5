//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BookmarkId, UserId};
use sqlx::PgPool;

use crate::domain::entity::bookmark::{Bookmark, NewBookmark};
use crate::domain::repository::BookmarkRepository;
use crate::domain::value_object::{bookmark_title::BookmarkTitle, bookmark_url::BookmarkUrl};
use crate::error::BookmarkResult;

/// PostgreSQL-backed bookmark repository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookmarkRepository for PgBookmarkRepository {
    async fn create(&self, bookmark: &NewBookmark) -> BookmarkResult<Bookmark> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            INSERT INTO bookmarks (title, url, description, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, url, description, user_id, created_at, updated_at
            "#,
        )
        .bind(bookmark.title.as_str())
        .bind(bookmark.url.as_str())
        .bind(bookmark.description.as_deref())
        .bind(bookmark.user_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_bookmark())
    }

    async fn list_by_owner(&self, owner: UserId) -> BookmarkResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, title, url, description, user_id, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookmarkRow::into_bookmark).collect())
    }

    async fn find_by_id(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, title, url, description, user_id, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.get())
        .bind(owner.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookmarkRow::into_bookmark))
    }

    async fn update(&self, bookmark: &Bookmark) -> BookmarkResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE bookmarks SET
                title = $3,
                url = $4,
                description = $5,
                updated_at = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(bookmark.id.get())
        .bind(bookmark.user_id.get())
        .bind(bookmark.title.as_str())
        .bind(bookmark.url.as_str())
        .bind(bookmark.description.as_deref())
        .bind(bookmark.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, owner: UserId, id: BookmarkId) -> BookmarkResult<bool> {
        let affected = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: i64,
    title: String,
    url: String,
    description: Option<String>,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl BookmarkRow {
    fn into_bookmark(self) -> Bookmark {
        Bookmark {
            id: BookmarkId::new(self.id),
            title: BookmarkTitle::from_db(self.title),
            url: BookmarkUrl::from_db(self.url),
            description: self.description,
            user_id: UserId::new(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

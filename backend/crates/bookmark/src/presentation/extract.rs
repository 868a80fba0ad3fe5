//! Request Extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use kernel::id::BookmarkId;

use crate::error::BookmarkError;

/// `{id}` path segment as a [`BookmarkId`]
///
/// A non-integer segment is a validation error (422, problem JSON) instead of
/// axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct BookmarkIdPath(pub BookmarkId);

impl<S> FromRequestParts<S> for BookmarkIdPath
where
    S: Send + Sync,
{
    type Rejection = BookmarkError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                BookmarkError::Validation(format!("id: {}", rejection.body_text()))
            })?;

        Ok(Self(BookmarkId::new(id)))
    }
}

//! HTTP Handlers
//!
//! Every handler runs behind `auth::require_auth` and scopes its work to the
//! [`CurrentUser`].

use auth::CurrentUser;
use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    CreateBookmarkInput, CreateBookmarkUseCase, DeleteBookmarkUseCase, GetBookmarkUseCase,
    ListBookmarksUseCase, UpdateBookmarkInput, UpdateBookmarkUseCase,
};
use crate::domain::repository::BookmarkRepository;
use crate::error::BookmarkResult;
use crate::presentation::dto::{BookmarkResponse, CreateBookmarkRequest, UpdateBookmarkRequest};
use crate::presentation::extract::BookmarkIdPath;

/// Shared state for bookmark handlers
#[derive(Clone)]
pub struct BookmarkAppState<B>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<B>,
}

/// POST /bookmarks
pub async fn create_bookmark<B>(
    State(state): State<BookmarkAppState<B>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateBookmarkRequest>,
) -> BookmarkResult<Json<BookmarkResponse>>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateBookmarkUseCase::new(state.repo.clone());

    let input = CreateBookmarkInput {
        title: req.title,
        url: req.url,
        description: req.description,
    };

    let bookmark = use_case.execute(user.id, input).await?;

    Ok(Json(BookmarkResponse::from(&bookmark)))
}

/// GET /bookmarks
pub async fn list_bookmarks<B>(
    State(state): State<BookmarkAppState<B>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> BookmarkResult<Json<Vec<BookmarkResponse>>>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    let bookmarks = ListBookmarksUseCase::new(state.repo.clone())
        .execute(user.id)
        .await?;

    Ok(Json(bookmarks.iter().map(BookmarkResponse::from).collect()))
}

/// GET /bookmarks/{id}
pub async fn get_bookmark<B>(
    State(state): State<BookmarkAppState<B>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    BookmarkIdPath(id): BookmarkIdPath,
) -> BookmarkResult<Json<BookmarkResponse>>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    let bookmark = GetBookmarkUseCase::new(state.repo.clone())
        .execute(user.id, id)
        .await?;

    Ok(Json(BookmarkResponse::from(&bookmark)))
}

/// PUT /bookmarks/{id}
pub async fn update_bookmark<B>(
    State(state): State<BookmarkAppState<B>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    BookmarkIdPath(id): BookmarkIdPath,
    Json(req): Json<UpdateBookmarkRequest>,
) -> BookmarkResult<Json<BookmarkResponse>>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateBookmarkUseCase::new(state.repo.clone());

    let input = UpdateBookmarkInput {
        title: req.title,
        url: req.url,
        description: req.description,
    };

    let bookmark = use_case
        .execute(user.id, id, input)
        .await?;

    Ok(Json(BookmarkResponse::from(&bookmark)))
}

/// DELETE /bookmarks/{id}
pub async fn delete_bookmark<B>(
    State(state): State<BookmarkAppState<B>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    BookmarkIdPath(id): BookmarkIdPath,
) -> BookmarkResult<StatusCode>
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    DeleteBookmarkUseCase::new(state.repo.clone())
        .execute(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

//! Bookmark Router

use auth::{AuthAppState, domain::repository::UserRepository, protect};
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BookmarkRepository;
use crate::presentation::handlers::{self, BookmarkAppState};

/// Create the `/bookmarks` routes, all behind `require_auth`
///
/// Paths are absolute (`/bookmarks`, `/bookmarks/{id}`); merge the result
/// rather than nesting it.
pub fn bookmark_router<B, R>(repo: B, auth: AuthAppState<R>) -> Router
where
    B: BookmarkRepository + Clone + Send + Sync + 'static,
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = BookmarkAppState {
        repo: Arc::new(repo),
    };

    let routes = Router::new()
        .route(
            "/bookmarks",
            get(handlers::list_bookmarks::<B>).post(handlers::create_bookmark::<B>),
        )
        .route(
            "/bookmarks/{id}",
            get(handlers::get_bookmark::<B>)
                .put(handlers::update_bookmark::<B>)
                .delete(handlers::delete_bookmark::<B>),
        );

    protect(routes, auth).with_state(state)
}

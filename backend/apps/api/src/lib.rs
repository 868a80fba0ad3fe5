//! Bookmark Manager API
//!
//! Router assembly shared by the binary and the HTTP tests.

pub mod config;

use auth::{AuthAppState, AuthConfig, auth_router, domain::repository::UserRepository};
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, routing::get};
use bookmark::{bookmark_router, domain::repository::BookmarkRepository};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const WELCOME_MESSAGE: &str = "Welcome to the Bookmark Manager API";

/// Build the full application router
///
/// `GET /` stays at the root; `/users/*` and `/bookmarks/*` live under
/// `api_prefix` (an empty prefix mounts them at the root).
pub fn build_router<U, B>(users: U, bookmarks: B, config: AuthConfig, api_prefix: &str) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    B: BookmarkRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(users, config);

    let api = Router::new()
        .nest("/users", auth_router(auth_state.clone()))
        .merge(bookmark_router(bookmarks, auth_state));

    let prefix = api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    router.route("/", get(root))
}

/// CORS for the browser frontend
///
/// `None` allows any origin without credentials.
pub fn cors_layer(origins: Option<Vec<HeaderValue>>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    match origins {
        Some(origins) => cors
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true),
        None => cors.allow_origin(AllowOrigin::any()),
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

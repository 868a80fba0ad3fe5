//! Bookmark Backend Module
//!
//! Per-user bookmark CRUD. Every operation is scoped to the authenticated
//! owner: a bookmark owned by someone else is reported exactly like a
//! missing one (404).
//!
//! Layout follows the `auth` crate:
//! - `domain/` - Bookmark entity, URL/title value objects, repository trait
//! - `application/` - Create/list/get/update/delete use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BookmarkError, BookmarkResult};
pub use infra::postgres::PgBookmarkRepository;
pub use presentation::router::bookmark_router;

#[cfg(test)]
pub(crate) mod test_support;

//! Application Layer
//!
//! Bookmark use cases. Each takes the authenticated owner's id and never
//! reaches rows owned by anyone else.

pub mod create_bookmark;
pub mod delete_bookmark;
pub mod get_bookmark;
pub mod list_bookmarks;
pub mod update_bookmark;

// Re-exports
pub use create_bookmark::{CreateBookmarkInput, CreateBookmarkUseCase};
pub use delete_bookmark::DeleteBookmarkUseCase;
pub use get_bookmark::GetBookmarkUseCase;
pub use list_bookmarks::ListBookmarksUseCase;
pub use update_bookmark::{UpdateBookmarkInput, UpdateBookmarkUseCase};

//! Bookmark Error Types
//!
//! Bookmark-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Bookmark-specific result type alias
pub type BookmarkResult<T> = Result<T, BookmarkError>;

#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Absent, or owned by someone else (indistinguishable on purpose)
    #[error("Bookmark not found")]
    NotFound,

    /// Field validation failed; message names the field
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BookmarkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookmarkError::NotFound => ErrorKind::NotFound,
            BookmarkError::Validation(_) => ErrorKind::UnprocessableEntity,
            BookmarkError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            BookmarkError::Validation(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Fix the named field and retry"),
            BookmarkError::Database(_) => AppError::new(self.kind(), "Internal server error"),
            BookmarkError::NotFound => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BookmarkError::Database(e) => {
                tracing::error!(error = %e, "Bookmark database error");
            }
            _ => {
                tracing::debug!(error = %self, "Bookmark error");
            }
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            BookmarkError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            BookmarkError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BookmarkError::Validation("url: relative URL without a base".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            BookmarkError::NotFound.to_app_error().message(),
            "Bookmark not found"
        );
    }
}

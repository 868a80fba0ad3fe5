//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email belongs to another account
    #[error("Email already registered")]
    DuplicateEmail,

    /// User name belongs to another account
    #[error("Username already taken")]
    DuplicateUsername,

    /// Unknown user name or wrong password (deliberately indistinguishable)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Missing, malformed, expired or orphaned bearer token
    #[error("Could not validate credentials")]
    Unauthorized,

    /// Input rejected by a value object; message names the field
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateEmail | AuthError::DuplicateUsername => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::DuplicateEmail => AppError::new(self.kind(), self.to_string())
                .with_action("Sign in or use a different email"),
            AuthError::DuplicateUsername => AppError::new(self.kind(), self.to_string())
                .with_action("Choose a different username"),
            // Server-side details stay in the log
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthorized => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Keeps the pool-exhaustion / unavailable distinction
            AuthError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::DuplicateEmail.kind().status_code(), 400);
        assert_eq!(AuthError::DuplicateUsername.kind().status_code(), 400);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::Unauthorized.kind().status_code(), 401);
        assert_eq!(
            AuthError::Validation("email: Invalid email format".into())
                .kind()
                .status_code(),
            422
        );
        assert_eq!(AuthError::Internal("x".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Incorrect username or password"
        );
        assert_eq!(
            AuthError::DuplicateEmail.to_string(),
            "Email already registered"
        );
        assert_eq!(
            AuthError::DuplicateUsername.to_string(),
            "Username already taken"
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = AuthError::Internal("stored hash is corrupt".into()).to_app_error();
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_unauthorized_response_has_bearer_challenge() {
        let response = AuthError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}

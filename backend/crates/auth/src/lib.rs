//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with email + user name + password
//! - OAuth2 password-flow login returning a stateless bearer token
//! - `require_auth` middleware resolving the token to a [`CurrentUser`]
//! - Self-service profile update and account deletion
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned
//! - Tokens are HMAC-signed JWTs with a fixed lifetime and no revocation
//! - Login failures do not reveal whether the user name exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::{AuthAppState, CurrentUser, auth_router, protect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
pub(crate) mod test_support;

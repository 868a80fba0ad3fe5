//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary shared by the `auth` and `bookmark`
//! crates:
//! - The wire-level error type and its HTTP status classification
//! - Typed integer IDs for users and bookmarks
//!
//! Framework glue (`sqlx`, `axum`) is feature-gated so the domain crates can
//! pick what they need.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

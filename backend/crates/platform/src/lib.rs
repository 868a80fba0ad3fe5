//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with optional pepper)
//! - Signed bearer tokens (HMAC JWT)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod password;
pub mod token;

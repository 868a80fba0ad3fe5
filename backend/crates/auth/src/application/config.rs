//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared behind an `Arc`.

use platform::password::{PasswordConfig, PasswordHasher};
use platform::token::{TokenConfig, TokenIssuer};

/// Auth application configuration
#[derive(Debug)]
pub struct AuthConfig {
    /// Argon2id hasher (carries the optional pepper)
    pub hasher: PasswordHasher,
    /// Bearer token issuer/validator (carries secret, algorithm, TTL)
    pub tokens: TokenIssuer,
}

impl AuthConfig {
    pub fn new(token: TokenConfig, password: PasswordConfig) -> Self {
        Self {
            hasher: PasswordHasher::new(password),
            tokens: TokenIssuer::new(&token),
        }
    }

    /// Create config with a random signing secret and no pepper (for development)
    pub fn development() -> Self {
        Self::new(TokenConfig::development(), PasswordConfig::default())
    }
}

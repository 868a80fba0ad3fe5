//! User Password Value Object
//!
//! Domain wrappers around `platform::password`; cryptography lives there.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::{PasswordConfig, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(PasswordConfig::default());
//! let raw = RawPassword::new("p1".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, &hasher).unwrap();
//! assert!(hashed.verify(&raw, &hasher).unwrap());
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordHasher, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate user input
    ///
    /// Rejects empty, over-long and control-character input with a
    /// `password:`-prefixed validation error.
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| {
            let message = match e {
                PasswordPolicyError::EmptyOrWhitespace => "Password cannot be empty".to_string(),
                PasswordPolicyError::TooLong { max, actual } => format!(
                    "Password must be at most {} characters (got {})",
                    max, actual
                ),
                PasswordPolicyError::InvalidCharacter => {
                    "Password contains invalid characters".to_string()
                }
            };
            AuthError::Validation(format!("password: {}", message))
        })?;

        Ok(Self(clear_text))
    }

    /// Spend one verification's worth of work against a throwaway hash
    pub fn dummy_verify(&self, hasher: &PasswordHasher) {
        hasher.dummy_verify(&self.0);
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword, hasher: &PasswordHasher) -> AuthResult<Self> {
        let hashed = hasher
            .hash(&raw.0)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// `Ok(false)` on mismatch; an error means the stored hash is unusable.
    pub fn verify(&self, raw: &RawPassword, hasher: &PasswordHasher) -> AuthResult<bool> {
        hasher
            .verify(&raw.0, self.0.as_phc_string())
            .map_err(|e: PasswordHashError| AuthError::Internal(e.to_string()))
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

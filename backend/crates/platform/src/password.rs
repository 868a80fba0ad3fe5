//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, PHC string format, random salt per call)
//! - Zeroization of clear-text input
//! - Constant-time comparison (inside `argon2`)
//! - Optional application-wide pepper supplied through [`PasswordConfig`]
//!
//! Verification never fails on a wrong password, it returns `Ok(false)`.
//! An `Err` means the stored hash is unusable, which is a data-corruption or
//! configuration problem rather than a client mistake.

use std::fmt;
use std::sync::OnceLock;

use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier as _};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Input hashed once to give unknown-user logins the same cost as known ones
const TIMING_DUMMY_PASSWORD: &str = "timing-equalisation-dummy";

// ============================================================================
// Error Types
// ============================================================================

/// Password input rejected before hashing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a parseable PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Hash parsed but the verifier could not run (unsupported params etc.)
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Hasher configuration, built once at startup
#[derive(Clone, Default)]
pub struct PasswordConfig {
    /// Application-wide secret appended to every password before hashing
    pub pepper: Option<Vec<u8>>,
}

impl fmt::Debug for PasswordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordConfig")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Not `Clone`, so copies cannot leak by accident
/// - `Debug` output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize (NFKC) and validate user input
    ///
    /// Only structural checks are applied; there is no minimum length or
    /// complexity policy.
    pub fn new(mut raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, version, params, salt, hash)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string, e.g. a database column
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Salted one-way password hasher
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, PasswordConfig, PasswordHasher};
///
/// let hasher = PasswordHasher::new(PasswordConfig::default());
/// let password = ClearTextPassword::new("p1".to_string()).unwrap();
/// let hashed = hasher.hash(&password).unwrap();
/// assert!(hasher.verify(&password, hashed.as_phc_string()).unwrap());
/// ```
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    pepper: Option<Vec<u8>>,
    dummy: OnceLock<Option<HashedPassword>>,
}

impl PasswordHasher {
    pub fn new(config: PasswordConfig) -> Self {
        Self {
            // OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
            argon2: Argon2::default(),
            pepper: config.pepper,
            dummy: OnceLock::new(),
        }
    }

    /// Hash with a fresh random salt (128 bits)
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let mut input = self.peppered(password);
        let salt = SaltString::generate(OsRng);

        let result = self
            .argon2
            .hash_password(&input, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        input.zeroize();
        result
    }

    /// Check `password` against a stored PHC string
    ///
    /// `Ok(false)` on mismatch; `Err` only when `stored` is malformed.
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        stored: &str,
    ) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(stored).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let mut input = self.peppered(password);

        let outcome = match self.argon2.verify_password(&input, &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::VerificationFailed(e.to_string())),
        };

        input.zeroize();
        outcome
    }

    /// Burn one verification's worth of work without a real hash
    ///
    /// Called on the unknown-user path of a login so both failure paths cost
    /// the same.
    pub fn dummy_verify(&self, password: &ClearTextPassword) {
        let dummy = self.dummy.get_or_init(|| {
            ClearTextPassword::new(TIMING_DUMMY_PASSWORD.to_string())
                .ok()
                .and_then(|p| self.hash(&p).ok())
        });

        if let Some(dummy) = dummy {
            let _ = self.verify(password, dummy.as_phc_string());
        }
    }

    fn peppered(&self, password: &ClearTextPassword) -> Vec<u8> {
        let mut bytes = password.as_bytes().to_vec();
        if let Some(pepper) = &self.pepper {
            bytes.extend_from_slice(pepper);
        }
        bytes
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("algorithm", &"argon2id")
            .field("peppered", &self.pepper.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_short_passwords_are_accepted() {
        assert!(ClearTextPassword::new("p1".to_string()).is_ok());
    }

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new("".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);

        let result = ClearTextPassword::new("    ".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_password_too_long() {
        let result = ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let hashed = hasher.hash(&clear("testpassword123")).unwrap();

        assert!(hasher
            .verify(&clear("testpassword123"), hashed.as_phc_string())
            .unwrap());
        assert!(!hasher
            .verify(&clear("wrongpassword"), hashed.as_phc_string())
            .unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let first = hasher.hash(&clear("same-input")).unwrap();
        let second = hasher.hash(&clear("same-input")).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(hasher
            .verify(&clear("same-input"), second.as_phc_string())
            .unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let hashed = hasher.hash(&clear("plaintext-secret")).unwrap();
        assert!(!hashed.as_phc_string().contains("plaintext-secret"));
    }

    #[test]
    fn test_pepper_must_match() {
        let peppered = PasswordHasher::new(PasswordConfig {
            pepper: Some(b"pepper".to_vec()),
        });
        let plain = PasswordHasher::new(PasswordConfig::default());
        let hashed = peppered.hash(&clear("secret")).unwrap();

        assert!(peppered.verify(&clear("secret"), hashed.as_phc_string()).unwrap());
        assert!(!plain.verify(&clear("secret"), hashed.as_phc_string()).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let result = hasher.verify(&clear("secret"), "not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let hashed = hasher.hash(&clear("secret")).unwrap();
        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert_eq!(restored, hashed);
        assert!(HashedPassword::from_phc_string("garbage").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", clear("secret"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let config = PasswordConfig {
            pepper: Some(b"pepper".to_vec()),
        };
        assert!(format!("{:?}", config).contains("REDACTED"));
    }
}

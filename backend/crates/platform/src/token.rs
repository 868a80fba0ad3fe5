//! Bearer Token Issuing and Validation
//!
//! Stateless JWTs signed with an HMAC key. A token carries the subject
//! (username), the issue time and the expiry; nothing is stored server side,
//! so a token stays valid until `exp` regardless of later account changes.
//!
//! Expiry is checked here rather than by `jsonwebtoken`, so the rule is exact:
//! a token is rejected once `now >= issued_at + ttl`, with no leeway. The
//! standard `exp` claim only has whole seconds, so the sub-second part of the
//! expiry travels in a private `exp_nanos` claim.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 120;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or expired
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Unsupported token algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Token secret must not be empty")]
    EmptySecret,

    #[error("Token lifetime out of range: {0} minutes")]
    InvalidTtl(i64),
}

// ============================================================================
// Configuration
// ============================================================================

/// Signing configuration, built once at startup
#[derive(Clone)]
pub struct TokenConfig {
    secret: Zeroizing<Vec<u8>>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenConfig {
    /// Validate and build a config
    ///
    /// Only HMAC algorithms are accepted, since the key is a shared secret.
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: &str,
        ttl_minutes: i64,
    ) -> Result<Self, TokenError> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let algorithm = match Algorithm::from_str(algorithm) {
            Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => alg,
            _ => return Err(TokenError::UnsupportedAlgorithm(algorithm.to_string())),
        };

        Ok(Self {
            secret,
            algorithm,
            ttl: ttl_from_minutes(ttl_minutes)?,
        })
    }

    /// Validated config with a random 32-byte secret
    ///
    /// ## Arguments
    /// - `algorithm`: `HS256`, `HS384` or `HS512`
    /// - `ttl_minutes`: token lifetime, positive
    pub fn with_random_secret(algorithm: &str, ttl_minutes: i64) -> Result<Self, TokenError> {
        Self::new(random_secret(), algorithm, ttl_minutes)
    }

    /// HS256, random secret, default lifetime (for development and tests)
    pub fn development() -> Self {
        Self {
            secret: Zeroizing::new(random_secret()),
            algorithm: Algorithm::HS256,
            ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

fn random_secret() -> Vec<u8> {
    use rand::RngCore;
    let mut secret = vec![0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut secret);
    secret
}

/// Positive, and far enough below chrono's range that `now + ttl` exists
fn ttl_from_minutes(ttl_minutes: i64) -> Result<Duration, TokenError> {
    Duration::try_minutes(ttl_minutes)
        .filter(|ttl| *ttl > Duration::zero())
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or(TokenError::InvalidTtl(ttl_minutes))
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish()
    }
}

// ============================================================================
// Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Username
    sub: String,
    /// Issued at (Unix seconds)
    iat: i64,
    /// Expiry (Unix seconds, rounded down)
    exp: i64,
    /// Sub-second part of the expiry
    exp_nanos: u32,
}

// ============================================================================
// Issuer / Validator
// ============================================================================

/// Issues and validates signed bearer tokens
///
/// ## Examples
/// ```rust
/// use platform::token::{TokenConfig, TokenIssuer};
///
/// let issuer = TokenIssuer::new(&TokenConfig::with_random_secret("HS256", 30).unwrap());
/// let token = issuer.issue("alice").unwrap();
/// assert_eq!(issuer.validate(&token).unwrap(), "alice");
/// ```
pub struct TokenIssuer {
    header: Header,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        // exp is compared in validate_at
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            header: Header::new(config.algorithm),
            encoding: EncodingKey::from_secret(&config.secret),
            decoding: DecodingKey::from_secret(&config.secret),
            validation,
            ttl: config.ttl,
        }
    }

    /// Issue a token for `subject` valid for the configured TTL from now
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::Signing("expiry out of range".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            exp_nanos: expires_at.timestamp_subsec_nanos(),
        };

        encode(&self.header, &claims, &self.encoding).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate a token and return its subject
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if the current time were `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            TokenError::InvalidToken
        })?;

        let Claims {
            sub,
            exp,
            exp_nanos,
            ..
        } = data.claims;

        let expires_at =
            DateTime::<Utc>::from_timestamp(exp, exp_nanos).ok_or(TokenError::InvalidToken)?;
        if expires_at <= now {
            tracing::debug!(exp, "Token expired");
            return Err(TokenError::InvalidToken);
        }

        Ok(sub)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.header.alg)
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish()
    }
}

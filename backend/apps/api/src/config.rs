//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded by `main`).
//! Every invalid value fails startup with an error naming the variable.

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use platform::password::PasswordConfig;
use platform::token::{DEFAULT_TOKEN_TTL_MINUTES, TokenConfig, TokenError};
use std::env;
use std::net::SocketAddr;

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_API_PREFIX: &str = "/api/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Normalized: empty, or starts with `/` and has no trailing `/`
    pub api_prefix: String,
    pub token: TokenConfig,
    pub password: PasswordConfig,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<HeaderValue>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_raw:?}"))?;

        let api_prefix = normalize_prefix(
            &lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
        )?;

        let algorithm = lookup("ALGORITHM").unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());

        let ttl_minutes = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("ACCESS_TOKEN_EXPIRE_MINUTES must be a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let token = match lookup("SECRET_KEY").filter(|v| !v.is_empty()) {
            Some(secret) => TokenConfig::new(secret.into_bytes(), algorithm.trim(), ttl_minutes)
                .map_err(token_config_error)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("SECRET_KEY not set, using a random secret (tokens die on restart)");
                TokenConfig::with_random_secret(algorithm.trim(), ttl_minutes)
                    .map_err(token_config_error)?
            }
            None => bail!("SECRET_KEY must be set in production"),
        };

        let password = PasswordConfig {
            pepper: lookup("PASSWORD_PEPPER")
                .filter(|v| !v.is_empty())
                .map(String::into_bytes),
        };

        let frontend_origins = match lookup("FRONTEND_ORIGINS") {
            Some(raw) if !raw.trim().is_empty() && raw.trim() != "*" => {
                let origins = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        HeaderValue::from_str(origin).with_context(|| {
                            format!("FRONTEND_ORIGINS contains an invalid origin: {origin:?}")
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Some(origins)
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            api_prefix,
            token,
            password,
            frontend_origins,
        })
    }
}

/// Name the variable behind a rejected token setting
fn token_config_error(err: TokenError) -> anyhow::Error {
    let variable = match err {
        TokenError::InvalidTtl(_) => "ACCESS_TOKEN_EXPIRE_MINUTES",
        TokenError::UnsupportedAlgorithm(_) => "ALGORITHM",
        _ => "SECRET_KEY",
    };
    anyhow::Error::new(err).context(format!("{variable} is invalid"))
}

/// `"/"`, `""` -> `""`; `"api/v1/"` -> `"/api/v1"`
fn normalize_prefix(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.contains(char::is_whitespace) || trimmed.contains('{') {
        bail!("API_PREFIX is not a plain path: {raw:?}");
    }
    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("/{trimmed}"))
    }
}

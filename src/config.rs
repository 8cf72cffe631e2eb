// ABOUTME: Environment-based server configuration
// ABOUTME: Loads port, database URL, JWT secret, and session TTL once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Server configuration
//!
//! Configuration is environment-only, loaded once at startup. The JWT signing
//! secret has no default: a shipped build must be given one explicitly.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;
/// Default session lifetime in seconds, also used as the cookie Max-Age
pub const DEFAULT_SESSION_TTL_SECS: i64 = 3600;
/// Default SQLite database URL (created on first run)
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/training-notebook.db?mode=rwc";
/// Longest accepted session lifetime (one year); keeps the TTL well inside
/// the range chrono's duration arithmetic can represent without panicking
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 3600;

/// Process-wide server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds on
    pub http_port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Symmetric secret used to sign session tokens
    pub jwt_secret: String,
    /// Session token and cookie lifetime in seconds
    pub session_ttl_secs: i64,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Reads `TRAINING_HTTP_PORT`, `TRAINING_DATABASE_URL`,
    /// `TRAINING_JWT_SECRET`, and `TRAINING_SESSION_TTL_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `TRAINING_JWT_SECRET` is unset or empty, or if a
    /// numeric variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("TRAINING_HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::internal(format!("invalid TRAINING_HTTP_PORT: {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("TRAINING_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let jwt_secret = env::var("TRAINING_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::internal("TRAINING_JWT_SECRET must be set to a non-empty value")
            })?;

        let session_ttl_secs = match env::var("TRAINING_SESSION_TTL_SECS") {
            Ok(raw) => {
                let parsed = raw.parse().map_err(|e| {
                    AppError::internal(format!("invalid TRAINING_SESSION_TTL_SECS: {e}"))
                })?;
                validate_session_ttl(parsed)?
            }
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            http_port,
            database_url,
            jwt_secret,
            session_ttl_secs,
        })
    }
}

/// Reject session lifetimes that are non-positive or longer than
/// [`MAX_SESSION_TTL_SECS`]
///
/// The TTL feeds chrono duration arithmetic when tokens and cookie expiry
/// timestamps are built; out-of-range values must fail here at startup, not
/// panic on the first login.
///
/// # Errors
///
/// Returns an error when the value is outside `1..=MAX_SESSION_TTL_SECS`.
pub fn validate_session_ttl(ttl_secs: i64) -> AppResult<i64> {
    if ttl_secs <= 0 {
        return Err(AppError::internal(format!(
            "TRAINING_SESSION_TTL_SECS must be positive, got {ttl_secs}"
        )));
    }
    if ttl_secs > MAX_SESSION_TTL_SECS {
        return Err(AppError::internal(format!(
            "TRAINING_SESSION_TTL_SECS must be at most {MAX_SESSION_TTL_SECS}, got {ttl_secs}"
        )));
    }
    Ok(ttl_secs)
}

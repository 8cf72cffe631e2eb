// ABOUTME: Session token issuance and verification plus password hashing helpers
// ABOUTME: Signs HS256 JWTs carrying a single user identity claim with a server-held secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Authentication and session management
//!
//! [`AuthManager`] is the token codec: it turns a [`UserId`] into an opaque
//! signed token and reverses that mapping. Tokens are stateless; validity is
//! determined purely by signature and expiry at verification time.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::UserId;

/// Decoded session token payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the authenticated user
    pub sub: i64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Issues and verifies session tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl AuthManager {
    /// Create a manager signing with the given secret; tokens expire after
    /// `token_ttl_secs`
    #[must_use]
    pub fn new(secret: &str, token_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: Duration::seconds(token_ttl_secs),
        }
    }

    /// Issue a signed session token for the given user
    ///
    /// # Errors
    ///
    /// Returns an internal error if signing fails.
    pub fn issue(&self, user_id: UserId) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.0,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("token signing failed: {e}")))
    }

    /// Verify a session token and return the user identity it carries
    ///
    /// # Errors
    ///
    /// Returns an auth-invalid error when the token cannot be parsed, the
    /// signature does not verify, or the token has expired.
    pub fn verify(&self, token: &str) -> AppResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AppError::auth_invalid(format!("invalid session token: {e}")))?;

        if data.claims.sub < 0 {
            return Err(AppError::auth_invalid("invalid session token: bad subject"));
        }

        Ok(UserId(data.claims.sub))
    }
}

/// Minimum accepted password length at signup
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Check signup password requirements
///
/// # Errors
///
/// Returns an `InvalidInput` error describing the violated requirement.
pub fn check_password_requirements(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid_input(format!(
            "password too short, must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a plaintext password with bcrypt
///
/// Blocking work; call from `spawn_blocking` on the request path.
///
/// # Errors
///
/// Returns an internal error if hashing fails.
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored bcrypt hash
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

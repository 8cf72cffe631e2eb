// ABOUTME: Unified error handling with standard error codes and HTTP responses
// ABOUTME: Maps application errors to status codes and a single-field JSON message body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Application error types
//!
//! Every fallible path in the crate returns [`AppResult`]. Errors carry an
//! [`ErrorCode`] that determines the HTTP status, and a client-facing message.
//! Error responses serialize as `{"message": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Stable error classification, mapped onto HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No session was presented on a protected route
    AuthRequired,
    /// A session token was presented but failed verification
    AuthInvalid,
    /// A submitted field violates its validation constraint
    InvalidInput,
    /// A resource identifier could not be parsed or is negative
    InvalidIdentifier,
    /// Resource absent, or present but not owned by the caller
    ResourceNotFound,
    /// Unexpected failure in the persistence layer
    DatabaseError,
    /// Any other unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error class
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::AuthRequired | Self::AuthInvalid => StatusCode::UNAUTHORIZED,
            Self::InvalidInput | Self::InvalidIdentifier => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error with classification and client-facing message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Message returned to the client
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing session on a protected route
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRequired, message)
    }

    /// Session token failed verification
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Field validation failure; the message names the field and constraint
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed or negative resource identifier
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidIdentifier, message)
    }

    /// Resource not found (or not owned by the caller)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Persistence failure. The internal cause is logged by the caller,
    /// never returned to the client.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.status();

        // Server-side failures keep their detail in the logs only
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = ?self.code, detail = %self.message, "internal error");
            "internal server error".to_owned()
        } else {
            self.message
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("resource not found"),
            other => Self::database(format!("database operation failed: {other}")),
        }
    }
}

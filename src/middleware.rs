// ABOUTME: Session middleware gating protected routes behind a valid token
// ABOUTME: Verifies the session cookie and binds a typed user identity to the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Session middleware
//!
//! Per request, single pass: read the session cookie (or `Authorization:
//! Bearer` header), verify it, and insert a typed [`AuthedUser`] extension
//! for the inner handler. Any failure responds 401 and aborts the chain
//! before the handler or any store call runs.
//!
//! Handlers retrieve the identity through the [`AuthedUser`] extractor,
//! which fails closed with 401 if the extension was never bound.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::UserId;
use crate::security::cookies::{get_cookie_value, SESSION_COOKIE};
use crate::server::ServerResources;

/// Identity of the authenticated caller, bound by [`require_session`]
#[derive(Debug, Clone, Copy)]
pub struct AuthedUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Fail closed: a route that forgot the session layer must reject,
        // never default to a sentinel identity.
        parts
            .extensions
            .get::<Self>()
            .copied()
            .ok_or_else(|| AppError::auth_required("you must be logged in to perform this action"))
    }
}

/// Axum middleware enforcing a valid session on the wrapped routes
///
/// # Errors
///
/// Returns 401 when the session cookie is missing or its token fails
/// verification; the inner handler is never invoked in that case.
pub async fn require_session(
    State(resources): State<Arc<ServerResources>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();

    let token = get_cookie_value(headers, SESSION_COOKIE)
        .or_else(|| {
            headers
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(str::to_owned)
        })
        .ok_or_else(|| {
            debug!("request to protected route without session cookie");
            AppError::auth_required("you must be logged in to perform this action")
        })?;

    let user_id = resources.auth_manager.verify(&token)?;

    request.extensions_mut().insert(AuthedUser(user_id));
    Ok(next.run(request).await)
}

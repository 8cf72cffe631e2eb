// ABOUTME: Signup, login, and logout route handlers
// ABOUTME: Issues the session cookie on successful login and clears it on logout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Authentication routes
//!
//! Signup hashes the password before storage; login verifies it and issues
//! the session cookie. Failed logins are reported identically for an unknown
//! user id and a wrong password, so the endpoint cannot be used to probe for
//! account existence.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task;
use tracing::{debug, info};

use crate::auth::{check_password_requirements, hash_password, verify_password};
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserId};
use crate::security::cookies::{clear_session_cookie, set_session_cookie};
use crate::server::ServerResources;

const INVALID_CREDENTIALS: &str = "invalid user id or password";

/// Request body for `POST /api/auth/signup`
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Request body for `POST /api/auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Identifier assigned at signup
    pub id: i64,
    /// Plaintext password
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user
    pub user: UserInfo,
    /// RFC 3339 session expiry timestamp
    pub expires_at: String,
}

/// Public view of a user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    /// User identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.clone(),
        }
    }
}

/// Authentication routes (no session required)
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/signup", post(Self::handle_signup))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/logout", post(Self::handle_logout))
            .with_state(resources)
    }

    async fn handle_signup(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SignupRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let name = request.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::invalid_input("'name' field must not be empty"));
        }
        check_password_requirements(&request.password)?;

        // bcrypt is deliberately slow; keep it off the async executor
        let password = request.password;
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("password hashing task failed: {e}")))??;

        let user_id = resources.database.add_user(&name, &password_hash).await?;

        info!(user_id = %user_id, "user signed up");

        let response = UserInfo {
            id: user_id.0,
            name,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let user = Self::authenticate(&resources, UserId(request.id), request.password).await?;

        let token = resources.auth_manager.issue(user.id)?;
        let ttl_secs = resources.config.session_ttl_secs;
        let expires_at = (Utc::now() + Duration::seconds(ttl_secs)).to_rfc3339();

        info!(user_id = %user.id, "user logged in");

        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, &token, ttl_secs);

        let response = LoginResponse {
            user: UserInfo::from(&user),
            expires_at,
        };
        Ok((StatusCode::OK, headers, Json(response)).into_response())
    }

    async fn handle_logout() -> Response {
        let mut headers = HeaderMap::new();
        clear_session_cookie(&mut headers);
        (
            StatusCode::OK,
            headers,
            Json(json!({ "message": "logged out" })),
        )
            .into_response()
    }

    /// Verify credentials, reporting unknown user and wrong password
    /// identically
    async fn authenticate(
        resources: &ServerResources,
        user_id: UserId,
        password: String,
    ) -> AppResult<User> {
        let Some(user) = resources.database.user_by_id(user_id).await? else {
            debug!(user_id = %user_id, "login attempt for unknown user");
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        let password_hash = user.password_hash.clone();
        let is_valid = task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .map_err(|e| AppError::internal(format!("password verification task failed: {e}")))?;

        if !is_valid {
            debug!(user_id = %user_id, "login attempt with wrong password");
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        Ok(user)
    }
}

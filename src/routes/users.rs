// ABOUTME: User profile route handlers behind the session middleware
// ABOUTME: Callers can read and update only their own profile; other ids read as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! User profile routes
//!
//! The same non-leak rule as sets applies: requesting another user's id
//! yields 404, so the endpoint cannot be used to enumerate accounts.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::middleware::{require_session, AuthedUser};
use crate::models::UserId;
use crate::routes::auth::UserInfo;
use crate::server::ServerResources;

/// Request body for `PUT /api/users/:id`
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name
    pub name: String,
}

/// User profile routes (session required)
pub struct UserRoutes;

impl UserRoutes {
    /// Create the user routes, wrapped in the session middleware
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:id",
                get(Self::handle_read).put(Self::handle_update),
            )
            .route_layer(from_fn_with_state(resources.clone(), require_session))
            .with_state(resources)
    }

    async fn handle_read(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&raw_id)?;
        require_self(caller, user_id)?;

        let user = resources
            .database
            .user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("no such user with id {user_id}")))?;

        Ok((StatusCode::OK, Json(UserInfo::from(&user))).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        Path(raw_id): Path<String>,
        body: Result<Json<UpdateUserRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&raw_id)?;
        require_self(caller, user_id)?;

        let Json(request) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let name = request.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::invalid_input("'name' field must not be empty"));
        }

        resources.database.update_user_name(user_id, &name).await?;

        info!(user_id = %user_id, "user profile updated");

        let response = UserInfo {
            id: user_id.0,
            name,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// A caller may only address their own profile; anything else reads as
/// absent rather than forbidden
fn require_self(caller: UserId, requested: UserId) -> AppResult<()> {
    if caller != requested {
        return Err(AppError::not_found(format!(
            "no such user with id {requested}"
        )));
    }
    Ok(())
}

fn parse_user_id(raw: &str) -> AppResult<UserId> {
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::invalid_identifier("invalid user ID"))?;
    if id < 0 {
        return Err(AppError::invalid_identifier("user id cannot be negative"));
    }
    Ok(UserId(id))
}

// ABOUTME: CRUD route handlers for the set resource with per-user ownership enforcement
// ABOUTME: Every lookup is scoped to the authenticated caller so foreign sets read as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Set resource routes
//!
//! All routes sit behind the session middleware. The owner of a set is
//! always the authenticated caller: creation stamps it, and every other
//! operation passes both the set id and the caller id to the store, so a
//! set that exists but belongs to someone else is indistinguishable from a
//! nonexistent one.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::middleware::{require_session, AuthedUser};
use crate::models::{Set, SetData, SetId};
use crate::server::ServerResources;

/// Set resource routes (session required)
pub struct SetRoutes;

impl SetRoutes {
    /// Create the set routes, wrapped in the session middleware
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sets",
                get(Self::handle_read_all).post(Self::handle_create),
            )
            .route(
                "/api/sets/:id",
                get(Self::handle_read_one)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route_layer(from_fn_with_state(resources.clone(), require_session))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        body: Result<Json<SetData>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(data) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        data.validate()?;

        // Owner is always the caller; any owner field in the body was
        // discarded at deserialization.
        let set_id = resources.database.add_set(caller, &data).await?;

        info!(set_id = %set_id, owner_id = %caller, "set created");

        let created = Set {
            id: set_id,
            owner_id: caller,
            movement: data.movement,
            volume: data.volume,
            intensity: data.intensity,
        };
        Ok((StatusCode::CREATED, Json(created)).into_response())
    }

    async fn handle_read_all(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
    ) -> Result<Response, AppError> {
        // An empty result is a valid empty collection, never null or 404
        let sets = resources.database.sets_by_user(caller).await?;
        Ok((StatusCode::OK, Json(sets)).into_response())
    }

    async fn handle_read_one(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let set_id = parse_set_id(&raw_id)?;

        let set = resources
            .database
            .set_by_id_for_user(set_id, caller)
            .await?
            .ok_or_else(|| AppError::not_found(format!("no such set with id {set_id}")))?;

        Ok((StatusCode::OK, Json(set)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        Path(raw_id): Path<String>,
        body: Result<Json<SetData>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let set_id = parse_set_id(&raw_id)?;
        let Json(data) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        data.validate()?;

        // Wholesale replacement of mutable fields; id and owner are
        // preserved by the owner-scoped update statement.
        resources
            .database
            .update_set_for_user(set_id, caller, &data)
            .await?;

        info!(set_id = %set_id, owner_id = %caller, "set updated");

        let updated = Set {
            id: set_id,
            owner_id: caller,
            movement: data.movement,
            volume: data.volume,
            intensity: data.intensity,
        };
        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        AuthedUser(caller): AuthedUser,
        Path(raw_id): Path<String>,
    ) -> Result<Response, AppError> {
        let set_id = parse_set_id(&raw_id)?;

        resources
            .database
            .delete_set_for_user(set_id, caller)
            .await?;

        info!(set_id = %set_id, owner_id = %caller, "set deleted");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// Parse a set id path parameter
///
/// Malformed and negative ids are client errors, reported distinctly from a
/// missing resource.
fn parse_set_id(raw: &str) -> AppResult<SetId> {
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::invalid_identifier("invalid set ID"))?;
    if id < 0 {
        return Err(AppError::invalid_identifier("set id cannot be negative"));
    }
    Ok(SetId(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn parse_set_id_accepts_digits() {
        assert_eq!(parse_set_id("7").unwrap(), SetId(7));
        assert_eq!(parse_set_id("0").unwrap(), SetId(0));
    }

    #[test]
    fn parse_set_id_rejects_garbage_and_negatives() {
        assert_eq!(
            parse_set_id("seven").unwrap_err().code,
            ErrorCode::InvalidIdentifier
        );
        assert_eq!(
            parse_set_id("-1").unwrap_err().code,
            ErrorCode::InvalidIdentifier
        );
    }
}

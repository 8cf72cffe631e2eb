// ABOUTME: Owner-scoped set record database operations
// ABOUTME: Every read or mutation of an existing set requires both set id and owner id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Set, SetData, SetId, UserId};

impl Database {
    /// Insert a new set owned by `owner_id` and return the store-assigned id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn add_set(&self, owner_id: UserId, data: &SetData) -> AppResult<SetId> {
        let result = sqlx::query(
            "INSERT INTO sets (owner_id, movement, volume, intensity) VALUES ($1, $2, $3, $4)",
        )
        .bind(owner_id.0)
        .bind(&data.movement)
        .bind(data.volume)
        .bind(data.intensity)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to create set: {e}")))?;

        Ok(SetId(result.last_insert_rowid()))
    }

    /// Look up a set by id, scoped to its owner
    ///
    /// A set owned by a different user yields `None`, indistinguishable from
    /// an absent set.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn set_by_id_for_user(
        &self,
        set_id: SetId,
        owner_id: UserId,
    ) -> AppResult<Option<Set>> {
        let row = sqlx::query(
            "SELECT id, owner_id, movement, volume, intensity FROM sets \
             WHERE id = $1 AND owner_id = $2",
        )
        .bind(set_id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to fetch set: {e}")))?;

        row.map(|r| row_to_set(&r)).transpose()
    }

    /// List every set owned by the given user, oldest first
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn sets_by_user(&self, owner_id: UserId) -> AppResult<Vec<Set>> {
        let rows = sqlx::query(
            "SELECT id, owner_id, movement, volume, intensity FROM sets \
             WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to list sets: {e}")))?;

        rows.iter().map(row_to_set).collect()
    }

    /// Replace all mutable fields of a set, scoped to its owner
    ///
    /// `id` and `owner_id` are never touched by this statement.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the set is absent or owned by a
    /// different user, or a database error if the update fails.
    pub async fn update_set_for_user(
        &self,
        set_id: SetId,
        owner_id: UserId,
        data: &SetData,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE sets SET movement = $3, volume = $4, intensity = $5 \
             WHERE id = $1 AND owner_id = $2",
        )
        .bind(set_id.0)
        .bind(owner_id.0)
        .bind(&data.movement)
        .bind(data.volume)
        .bind(data.intensity)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("failed to update set: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("no such set with id {set_id}")));
        }
        Ok(())
    }

    /// Permanently delete a set, scoped to its owner
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the set is absent or owned by a
    /// different user, or a database error if the delete fails.
    pub async fn delete_set_for_user(&self, set_id: SetId, owner_id: UserId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sets WHERE id = $1 AND owner_id = $2")
            .bind(set_id.0)
            .bind(owner_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("failed to delete set: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("no such set with id {set_id}")));
        }
        Ok(())
    }
}

fn row_to_set(row: &SqliteRow) -> AppResult<Set> {
    let field = |e| AppError::database(format!("corrupt set row: {e}"));
    Ok(Set {
        id: SetId(row.try_get("id").map_err(field)?),
        owner_id: UserId(row.try_get("owner_id").map_err(field)?),
        movement: row.try_get("movement").map_err(field)?,
        volume: row.try_get("volume").map_err(field)?,
        intensity: row.try_get("intensity").map_err(field)?,
    })
}

// ABOUTME: User account database operations
// ABOUTME: Handles signup persistence, login lookup, and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserId};

impl Database {
    /// Insert a new user and return the store-assigned id
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn add_user(&self, name: &str, password_hash: &str) -> AppResult<UserId> {
        let result = sqlx::query("INSERT INTO users (name, password_hash) VALUES ($1, $2)")
            .bind(name)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("failed to create user: {e}")))?;

        Ok(UserId(result.last_insert_rowid()))
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn user_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, password_hash FROM users WHERE id = $1")
            .bind(user_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("failed to fetch user: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Update a user's display name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no user has the given id, or a database
    /// error if the update fails.
    pub async fn update_user_name(&self, user_id: UserId, name: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET name = $2 WHERE id = $1")
            .bind(user_id.0)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("no such user with id {user_id}")));
        }
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    Ok(User {
        id: UserId(
            row.try_get("id")
                .map_err(|e| AppError::database(format!("corrupt user row: {e}")))?,
        ),
        name: row
            .try_get("name")
            .map_err(|e| AppError::database(format!("corrupt user row: {e}")))?,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| AppError::database(format!("corrupt user row: {e}")))?,
    })
}

// ABOUTME: Core database management with schema migration for SQLite
// ABOUTME: Owns the connection pool shared by user and set operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Credential store
//!
//! [`Database`] wraps a `sqlx` SQLite pool and exposes the operations the
//! handlers need. Every set operation that reads or mutates an existing
//! record is owner-scoped: it takes both the set id and the caller's user id,
//! so a set belonging to another user behaves exactly like a missing one.

/// Set record operations (owner-scoped)
pub mod sets;
/// User account operations
pub mod users;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::{AppError, AppResult};

const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        password_hash TEXT NOT NULL
    )
";

const CREATE_SETS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS sets (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES users(id),
        movement TEXT NOT NULL,
        volume REAL NOT NULL,
        intensity REAL NOT NULL
    )
";

const CREATE_SETS_OWNER_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_sets_owner_id ON sets(owner_id)
";

/// Handle to the persistence layer
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Connect to the database at `url` and run schema migration
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection or migration fails.
    pub async fn new(url: &str) -> AppResult<Self> {
        // An in-memory SQLite database exists per connection; a pool wider
        // than one would hand each caller its own empty database.
        let max_connections = if url.contains(":memory:") || url.contains("mode=memory") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| AppError::database(format!("failed to connect to {url}: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a database error if any DDL statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in [CREATE_USERS_TABLE, CREATE_SETS_TABLE, CREATE_SETS_OWNER_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("migration failed: {e}")))?;
        }
        info!("database schema migrated");
        Ok(())
    }

    /// Liveness probe used by the health endpoint
    ///
    /// # Errors
    ///
    /// Returns a database error if the probe query fails.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("liveness probe failed: {e}")))?;
        Ok(())
    }
}

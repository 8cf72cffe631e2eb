// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, auth manager, and test user helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, dead_code)]

//! Shared test utilities for `training_notebook`
//!
//! Every test constructs its own isolated in-memory database, so tests can
//! run concurrently without interfering.

use std::sync::{Arc, Once};

use anyhow::Result;

use training_notebook::{
    auth::{hash_password, AuthManager},
    config::ServerConfig,
    database::Database,
    models::UserId,
    security::cookies::SESSION_COOKIE,
    server::ServerResources,
};

pub const TEST_JWT_SECRET: &str = "test-signing-secret";
pub const TEST_SESSION_TTL_SECS: i64 = 3600;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".to_owned(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        session_ttl_secs: TEST_SESSION_TTL_SECS,
    }
}

/// Create server resources backed by a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();

    let config = test_config();
    let database = Database::new(&config.database_url).await?;
    let auth_manager = AuthManager::new(&config.jwt_secret, config.session_ttl_secs);

    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        config,
    )))
}

/// Create a standalone in-memory database (for store-level tests)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Insert a user with the given name and password, returning its id
pub async fn create_test_user(
    database: &Database,
    name: &str,
    password: &str,
) -> Result<UserId> {
    let password_hash = hash_password(password)?;
    Ok(database.add_user(name, &password_hash).await?)
}

/// Build a Cookie header value carrying a valid session for the user
pub fn session_cookie_for(resources: &ServerResources, user_id: UserId) -> String {
    let token = resources
        .auth_manager
        .issue(user_id)
        .expect("failed to issue test token");
    format!("{SESSION_COOKIE}={token}")
}

// ABOUTME: Shared server resources and HTTP server assembly
// ABOUTME: Builds the application router and runs it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Server assembly
//!
//! [`ServerResources`] is the dependency bundle handed to every route group:
//! the database handle, the token codec, and configuration. It is constructed
//! once at startup and shared behind an `Arc`; tests construct isolated
//! instances against in-memory databases.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::routes::{auth::AuthRoutes, health::HealthRoutes, sets::SetRoutes, users::UserRoutes};

/// Upper bound on request handling, so a slow store call cannot hold a
/// connection indefinitely
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Dependencies shared by all route handlers
pub struct ServerResources {
    /// Credential store handle
    pub database: Database,
    /// Session token codec
    pub auth_manager: AuthManager,
    /// Process-wide configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the given dependencies
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: ServerConfig) -> Self {
        Self {
            database,
            auth_manager,
            config,
        }
    }
}

/// Build the complete application router
#[must_use]
pub fn app_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()))
        .merge(SetRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// Serve the application until interrupted
///
/// # Errors
///
/// Returns an error if binding the listener or serving fails.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let port = resources.config.http_port;
    let router = app_router(resources);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| AppError::internal(format!("failed to bind port {port}: {e}")))?;

    info!(port, "training notebook server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
        return;
    }
    info!("shutdown signal received");
}

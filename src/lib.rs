// ABOUTME: Main library entry point for the Training Notebook API
// ABOUTME: Provides a JWT-cookie authenticated CRUD API for exercise set tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

#![deny(unsafe_code)]

//! # Training Notebook
//!
//! A fitness-tracking CRUD API exposing exercise "sets" and "users" over
//! HTTP, backed by SQLite, with JWT-cookie session authentication.
//!
//! The core of the crate is the authenticated resource-access control layer:
//! session tokens are issued at login, verified by the session middleware,
//! and every set operation is scoped to the authenticated owner so that
//! cross-user access is impossible.
//!
//! ## Architecture
//!
//! - **`auth`**: token codec (issue/verify) and password hashing
//! - **`middleware`**: session gate binding a typed caller identity
//! - **`routes`**: thin HTTP handlers per domain
//! - **`database`**: owner-scoped persistence over `sqlx`/SQLite
//!
//! ## Example
//!
//! ```rust,no_run
//! use training_notebook::config::ServerConfig;
//! use training_notebook::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Training Notebook configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Session token issuance/verification and password hashing
pub mod auth;

/// Environment-based server configuration
pub mod config;

/// Credential store over SQLite
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Session middleware gating protected routes
pub mod middleware;

/// Core data models for users and sets
pub mod models;

/// HTTP routes organized by domain
pub mod routes;

/// Session cookie helpers
pub mod security;

/// Shared server resources and HTTP server assembly
pub mod server;

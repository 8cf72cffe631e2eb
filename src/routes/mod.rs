// ABOUTME: Route module organization for the HTTP surface
// ABOUTME: Each domain module owns its route definitions and thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! HTTP routes, organized by domain
//!
//! Each module exposes a `Routes` struct with a single `routes` constructor
//! taking the shared [`crate::server::ServerResources`]. Handlers are thin:
//! they parse and validate, call the database, and serialize the result.

/// Signup, login, and logout routes
pub mod auth;
/// Health check route
pub mod health;
/// Set resource CRUD routes (session required)
pub mod sets;
/// User profile routes (session required)
pub mod users;

// ABOUTME: Core data models for users and exercise sets
// ABOUTME: Provides typed identifiers, record structs, and field validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Data models
//!
//! [`UserId`] and [`SetId`] are distinct newtypes so an owner id can never be
//! passed where a set id is expected. Both are store-assigned `i64` rowids.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Unique identifier for a user, assigned by the store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a set, assigned by the store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(pub i64);

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Store-assigned identifier, immutable after creation
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Bcrypt hash of the user's password, never serialized to responses
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// An exercise set record
///
/// `owner_id` is stamped from the caller's session at creation time and is
/// never changed by updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Set {
    /// Store-assigned identifier
    pub id: SetId,
    /// Identity of the user who created this set
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
    /// Movement description, e.g. "Squat"
    pub movement: String,
    /// Repetition volume, strictly positive
    pub volume: f64,
    /// Intensity as a percentage in (0, 100]
    pub intensity: f64,
}

/// Client-supplied fields for creating or replacing a set
///
/// Owner information is deliberately absent: the owner is always the
/// authenticated caller. Unknown fields (such as a client-supplied
/// `ownerId`) are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SetData {
    /// Movement description
    pub movement: String,
    /// Repetition volume
    pub volume: f64,
    /// Intensity percentage
    pub intensity: f64,
}

// Movement strings are words of unicode word characters separated by spaces.
static MOVEMENT_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(\s+\w+)*$").unwrap_or_else(|e| panic!("movement rule: {e}")));

impl SetData {
    /// Validate all submitted fields, failing on the first violation
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the offending field and the
    /// violated constraint.
    pub fn validate(&self) -> AppResult<()> {
        if !MOVEMENT_RULE.is_match(&self.movement) {
            return Err(AppError::invalid_input(
                "'movement' field must use unicode characters",
            ));
        }
        if self.volume <= 0.0 {
            return Err(AppError::invalid_input(
                "'volume' field must be greater than 0",
            ));
        }
        if self.intensity <= 0.0 {
            return Err(AppError::invalid_input(
                "'intensity' field must be greater than 0",
            ));
        }
        if self.intensity > 100.0 {
            return Err(AppError::invalid_input(
                "'intensity' field must be no more than 100",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Security helpers for the HTTP surface
// ABOUTME: Hosts session cookie construction and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

/// Session cookie helpers
pub mod cookies;

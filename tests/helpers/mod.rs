// ABOUTME: Helper module index for integration tests
// ABOUTME: Re-exports the axum oneshot request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors
#![allow(dead_code)]

pub mod axum_test;

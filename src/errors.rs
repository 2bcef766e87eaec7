// ABOUTME: Error types re-exported from workout-core
// ABOUTME: Keeps `crate::errors` as the single import path for error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling for the workout tracker

pub use workout_core::errors::*;

// ABOUTME: Core types and constants for the workout statistics calculator
// ABOUTME: Foundation crate with error handling, unit constants, and the workout type model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. It changes infrequently, so the calculation crate can rebuild
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `WorkoutError`
//! - **constants**: Unit conversion constants shared by every workout variant
//! - **models**: The closed set of workout types and their reading layouts

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants
pub mod constants;

/// Core data models (`WorkoutType`)
pub mod models;

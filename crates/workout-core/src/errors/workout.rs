// ABOUTME: Workout-specific error types for dispatch and construction
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Error Types
//!
//! Errors raised while turning a `(type_code, readings)` package into a
//! workout. A missing calorie formula is not represented here: every variant
//! must implement it, so that mistake is a compile error.

use thiserror::Error;

/// Errors specific to workout dispatch and construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// No workout variant is registered for this type code
    #[error("Unknown workout type '{code}'")]
    UnknownWorkoutType {
        /// The unrecognized type code
        code: String,
    },

    /// The reading list does not have exactly the variant's field count
    #[error("Workout '{workout}' expects {expected} readings, got {actual}")]
    InvalidArgumentCount {
        /// Name of the workout variant
        workout: &'static str,
        /// Number of readings the variant requires
        expected: usize,
        /// Number of readings supplied
        actual: usize,
    },

    /// A reading violates one of the variant's invariants
    #[error("Invalid reading '{field}': {reason}")]
    InvalidReading {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl WorkoutError {
    /// Create an "unknown workout type" error
    #[must_use]
    pub fn unknown_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Create an "invalid argument count" error
    #[must_use]
    pub const fn invalid_argument_count(
        workout: &'static str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::InvalidArgumentCount {
            workout,
            expected,
            actual,
        }
    }

    /// Create an "invalid reading" error
    #[must_use]
    pub fn invalid_reading(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidReading {
            field,
            reason: reason.into(),
        }
    }
}

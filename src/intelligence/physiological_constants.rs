// ABOUTME: Calorie and stride coefficients for each workout variant
// ABOUTME: Named constants so every formula reads without magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants used by the workout calculations
//!
//! Each workout variant owns one module of coefficients. Values must be kept
//! at the stated precision: summaries are compared digit-for-digit against
//! reference outputs.

/// Stride constants shared by step-based workouts
pub mod stride {
    /// Default length of one step (meters)
    pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;
}

/// Running calorie formula coefficients
///
/// `(SPEED_MULTIPLIER * speed - SPEED_DEDUCTION) * weight / 1000 * duration_min`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
    /// Amount subtracted from the scaled speed
    pub const CALORIE_SPEED_DEDUCTION: f64 = 20.0;
}

/// Sports walking calorie formula coefficients
pub mod walking {
    /// Weight coefficient of the base metabolic term
    pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Exponent applied to mean speed
    pub const CALORIE_SPEED_EXPONENT: i32 = 2;
    /// Weight coefficient of the speed/height term
    pub const CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming constants
pub mod swimming {
    /// Length of one stroke (meters). Swimming distance comes from pool
    /// lengths, so this only answers `step_length_m` queries.
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Offset added to mean speed
    pub const CALORIE_SPEED_OFFSET: f64 = 1.1;
    /// Multiplier applied to the offset speed
    pub const CALORIE_SPEED_MULTIPLIER: f64 = 2.0;
}

// ABOUTME: Core data models for the workout tracker
// ABOUTME: Re-exports the workout type enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

/// Workout type enumeration and reading layouts
pub mod workout_type;

pub use workout_type::WorkoutType;

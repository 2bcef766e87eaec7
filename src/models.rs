// ABOUTME: Data models for workout reading packages
// ABOUTME: Re-exports the core workout type and defines the raw reading package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models

use serde::{Deserialize, Serialize};

pub use workout_core::models::WorkoutType;

/// One raw batch of sensor readings, as produced by a tracker device
///
/// The readings are positional; their meaning depends on `workout_type`
/// (see [`WorkoutType::reading_fields`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPackage {
    /// Short sensor code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Ordered numeric readings
    pub readings: Vec<f64>,
}

impl ReadingPackage {
    /// Create a package from a code and its readings
    #[must_use]
    pub fn new(workout_type: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            readings,
        }
    }
}

// ABOUTME: Workout type enumeration for sensor reading packages
// ABOUTME: Defines the supported workout types with code parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported workout types
///
/// The set is closed: adding a workout means adding a variant here and a
/// matching calculation in the tracker crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Running, measured in steps
    Running,
    /// Sports walking, measured in steps plus athlete height
    SportsWalking,
    /// Pool swimming, measured in pool lengths
    Swimming,
}

impl WorkoutType {
    /// Every supported workout type, in declaration order (the dispatch registry follows it)
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Short sensor code identifying this workout in a reading package
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Parse a sensor code. Codes are matched exactly (case-sensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|workout| workout.code() == code)
    }

    /// Label used in summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Positional reading fields expected for this workout, in order
    #[must_use]
    pub const fn reading_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lengths_count",
            ],
        }
    }

    /// Number of readings a package of this type must carry
    #[must_use]
    pub const fn expected_readings(&self) -> usize {
        self.reading_fields().len()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

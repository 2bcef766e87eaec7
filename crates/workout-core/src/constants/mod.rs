// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants shared by the workout calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

/// Unit conversion and measurement constants
pub mod units;

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Output format selector (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Unknown workout type policy (`fail` or `skip`)
    pub const UNKNOWN_POLICY: &str = "WORKOUT_UNKNOWN_POLICY";
    /// Path to a JSON file of reading packages (`-` for stdin)
    pub const INPUT: &str = "WORKOUT_INPUT";
}

/// Service identification used in structured logs
pub mod service_names {
    /// Name reported by the tracker binary
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}

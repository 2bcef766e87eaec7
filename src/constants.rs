// ABOUTME: Constants re-exported from workout-core
// ABOUTME: Unit conversions, environment variable names, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants

pub use workout_core::constants::*;

// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, mean speed, and calories from raw workout sensor readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw sensor reading packages into workout summaries for three
//! workout types: running, sports walking and swimming.
//!
//! ## Architecture
//!
//! Data flows one way through the crate:
//!
//! - **Packages**: `(type_code, readings)` pairs loaded from JSON or the built-in samples
//! - **Dispatch**: a static registry maps each code to a workout constructor
//! - **Intelligence**: the [`Training`](intelligence::Training) contract and its three variants
//! - **Formatters**: render a [`Summary`](intelligence::Summary) as text or JSON
//!
//! Everything is synchronous and pure arithmetic. Workouts hold no shared
//! state, so each package is processed independently.
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_tracker::intelligence::construct;
//!
//! let workout = construct("RUN", &[15000.0, 1.0, 75.0])?;
//! assert!((workout.distance_km() - 9.75).abs() < 1e-9);
//! println!("{}", workout.summary());
//! # Ok::<(), workout_tracker::errors::WorkoutError>(())
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants re-exported from `workout-core`
pub mod constants;

/// Unified error handling re-exported from `workout-core`
pub mod errors;

/// Output format abstraction (text, JSON)
pub mod formatters;

/// Workout calculations, variants, and dispatch
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Reading package loading and in-order processing
pub mod packages;

// ABOUTME: Static registry dispatching sensor codes to workout constructors
// ABOUTME: Validates positional reading counts before a workout is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout dispatch
//!
//! [`construct`] is the only way a raw `(type_code, readings)` pair becomes a
//! [`Workout`]. The reading list must match the variant's field count exactly.

use tracing::debug;

use crate::errors::WorkoutError;
use crate::intelligence::training::{Running, SportsWalking, Swimming, Workout, WorkoutRecord};
use crate::models::WorkoutType;

/// Builds a workout from positional readings, rejecting a wrong reading count
type Constructor = fn(&[f64]) -> Result<Workout, WorkoutError>;

/// Type-to-constructor table, in [`WorkoutType::ALL`] order. Each
/// `WorkoutType` appears exactly once.
const REGISTRY: [(WorkoutType, Constructor); 3] = [
    (WorkoutType::Running, build_running),
    (WorkoutType::SportsWalking, build_sports_walking),
    (WorkoutType::Swimming, build_swimming),
];

/// Build a workout from a sensor code and its positional readings
///
/// # Errors
///
/// - [`WorkoutError::UnknownWorkoutType`] if no variant is registered for `type_code`
/// - [`WorkoutError::InvalidArgumentCount`] if `readings` has the wrong length
/// - [`WorkoutError::InvalidReading`] if a reading breaks a variant invariant
pub fn construct(type_code: &str, readings: &[f64]) -> Result<Workout, WorkoutError> {
    let constructor = WorkoutType::from_code(type_code)
        .and_then(constructor_for)
        .ok_or_else(|| WorkoutError::unknown_type(type_code))?;

    debug!(
        workout.code = %type_code,
        workout.readings = ?readings,
        "Constructing workout"
    );
    constructor(readings)
}

fn constructor_for(workout_type: WorkoutType) -> Option<Constructor> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == workout_type)
        .map(|(_, constructor)| *constructor)
}

/// Sensor codes accepted by [`construct`], in registry order
#[must_use]
pub fn registered_codes() -> Vec<&'static str> {
    REGISTRY
        .iter()
        .map(|(workout_type, _)| workout_type.code())
        .collect()
}

fn build_running(readings: &[f64]) -> Result<Workout, WorkoutError> {
    match *readings {
        [action_count, duration_hours, weight_kg] => {
            let record = WorkoutRecord::new(action_count, duration_hours, weight_kg)?;
            Ok(Running::new(record).into())
        }
        _ => Err(count_mismatch(WorkoutType::Running, readings)),
    }
}

fn build_sports_walking(readings: &[f64]) -> Result<Workout, WorkoutError> {
    match *readings {
        [action_count, duration_hours, weight_kg, height_cm] => {
            let record = WorkoutRecord::new(action_count, duration_hours, weight_kg)?;
            Ok(SportsWalking::new(record, height_cm)?.into())
        }
        _ => Err(count_mismatch(WorkoutType::SportsWalking, readings)),
    }
}

fn build_swimming(readings: &[f64]) -> Result<Workout, WorkoutError> {
    match *readings {
        [action_count, duration_hours, weight_kg, pool_length_m, pool_lengths_count] => {
            let record = WorkoutRecord::new(action_count, duration_hours, weight_kg)?;
            Ok(Swimming::new(record, pool_length_m, pool_lengths_count)?.into())
        }
        _ => Err(count_mismatch(WorkoutType::Swimming, readings)),
    }
}

fn count_mismatch(workout_type: WorkoutType, readings: &[f64]) -> WorkoutError {
    WorkoutError::invalid_argument_count(
        workout_type.label(),
        workout_type.expected_readings(),
        readings.len(),
    )
}

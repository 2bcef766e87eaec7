// ABOUTME: Training contract and the Running, SportsWalking, and Swimming variants
// ABOUTME: Computes distance, mean speed, calories, and the derived workout summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout variants
//!
//! Every variant implements [`Training`]. Distance and mean speed have
//! step-based defaults; calories have none, so a variant without a calorie
//! formula does not compile.

use serde::Serialize;

use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::WorkoutError;
use crate::intelligence::physiological_constants::{running, stride, swimming, walking};
use crate::models::WorkoutType;

/// Readings common to every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    /// Atomic motion units (steps or strokes)
    pub action_count: u32,
    /// Workout duration in hours, always positive
    pub duration_hours: f64,
    /// Athlete weight in kilograms, always positive
    pub weight_kg: f64,
}

impl WorkoutRecord {
    /// Validate and build the common readings
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidReading`] when `action_count` is not a
    /// non-negative whole number or `duration_hours`/`weight_kg` are not positive.
    pub fn new(action_count: f64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count: whole_count("action_count", action_count)?,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }
}

/// Derived metrics of one workout, computed fresh on every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Workout variant label (e.g. `Running`)
    pub workout_label: String,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

/// Calculation contract shared by every workout variant
pub trait Training {
    /// Which variant this is
    fn workout_type(&self) -> WorkoutType;

    /// Readings common to all variants
    fn record(&self) -> &WorkoutRecord;

    /// Distance covered by one motion unit, in meters
    fn step_length_m(&self) -> f64 {
        stride::DEFAULT_STEP_LENGTH_M
    }

    /// Distance covered, in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed over the whole workout, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_hours
    }

    /// Energy spent, in kilocalories
    fn calories_kcal(&self) -> f64;

    /// Bundle every metric into a [`Summary`]
    fn summary(&self) -> Summary {
        Summary {
            workout_label: self.workout_type().label().to_owned(),
            duration_hours: self.record().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    /// Create a running workout
    #[must_use]
    pub const fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_kcal(&self) -> f64 {
        (running::CALORIE_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - running::CALORIE_SPEED_DEDUCTION)
            * self.record.weight_kg
            / METERS_PER_KM
            * self.record.duration_hours
            * MINUTES_PER_HOUR
    }
}

/// Sports walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking workout
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidReading`] if `height_cm` is not positive;
    /// height is a divisor of the calorie formula.
    pub fn new(record: WorkoutRecord, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            record,
            height_cm: positive("height_cm", height_cm)?,
        })
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_kcal(&self) -> f64 {
        // Floor division of speed² by height is part of the formula
        let speed_height_term =
            (self.mean_speed_kmh().powi(walking::CALORIE_SPEED_EXPONENT) / self.height_cm).floor();

        (walking::CALORIE_WEIGHT_MULTIPLIER * self.record.weight_kg
            + speed_height_term * walking::CALORIE_SPEED_HEIGHT_MULTIPLIER * self.record.weight_kg)
            * self.record.duration_hours
            * MINUTES_PER_HOUR
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    pool_length_m: f64,
    pool_lengths_count: u32,
}

impl Swimming {
    /// Create a swimming workout
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::InvalidReading`] if `pool_length_m` is not positive
    /// or `pool_lengths_count` is not a positive whole number.
    pub fn new(
        record: WorkoutRecord,
        pool_length_m: f64,
        pool_lengths_count: f64,
    ) -> Result<Self, WorkoutError> {
        let pool_lengths_count = whole_count("pool_lengths_count", pool_lengths_count)?;
        if pool_lengths_count == 0 {
            return Err(WorkoutError::invalid_reading(
                "pool_lengths_count",
                "must be at least 1",
            ));
        }

        Ok(Self {
            record,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lengths_count,
        })
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        swimming::STROKE_LENGTH_M
    }

    fn distance_km(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_count) / METERS_PER_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_count)
            / METERS_PER_KM
            / self.record.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::CALORIE_SPEED_OFFSET)
            * swimming::CALORIE_SPEED_MULTIPLIER
            * self.record.weight_kg
    }
}

/// A constructed workout of one of the three supported variants
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Swimming workout
    Swimming(Swimming),
}

impl Workout {
    /// Borrow the variant through the shared [`Training`] contract
    #[must_use]
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(workout) => workout,
            Self::SportsWalking(workout) => workout,
            Self::Swimming(workout) => workout,
        }
    }

    /// Which variant this is
    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    /// Distance covered, in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    /// Mean speed, in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    /// Energy spent, in kilocalories
    #[must_use]
    pub fn calories_kcal(&self) -> f64 {
        self.as_training().calories_kcal()
    }

    /// Every metric bundled into a [`Summary`]
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.as_training().summary()
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Self::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Self::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Self::Swimming(workout)
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::invalid_reading(
            field,
            format!("must be a positive number, got {value}"),
        ))
    }
}

fn whole_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::invalid_reading(
            field,
            format!("must be a non-negative whole number, got {value}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn record(action_count: f64, duration_hours: f64, weight_kg: f64) -> WorkoutRecord {
        WorkoutRecord::new(action_count, duration_hours, weight_kg).unwrap()
    }

    #[test]
    fn test_default_step_length() {
        let workout = Running::new(record(1000.0, 1.0, 70.0));
        assert!((workout.step_length_m() - 0.65).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_keeps_stroke_length() {
        let workout = Swimming::new(record(720.0, 1.0, 80.0), 25.0, 40.0).unwrap();
        assert!((workout.step_length_m() - 1.38).abs() < EPSILON);
    }

    #[test]
    fn test_walking_floor_division_kicks_in_for_fast_pace() {
        // ~18 km/h with 150 cm height: speed² / height floors to 2
        let workout = SportsWalking::new(record(27692.0, 1.0, 70.0), 150.0).unwrap();
        let speed = workout.mean_speed_kmh();
        assert!((speed * speed / 150.0).floor() > 1.0);
        let expected = (0.035 * 70.0 + (speed * speed / 150.0).floor() * 0.029 * 70.0) * 60.0;
        assert!((workout.calories_kcal() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_record_rejects_fractional_action_count() {
        let err = WorkoutRecord::new(10.5, 1.0, 70.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "action_count",
                ..
            }
        ));
    }

    #[test]
    fn test_record_rejects_non_positive_duration() {
        assert!(WorkoutRecord::new(100.0, 0.0, 70.0).is_err());
        assert!(WorkoutRecord::new(100.0, -1.0, 70.0).is_err());
        assert!(WorkoutRecord::new(100.0, f64::NAN, 70.0).is_err());
    }

    #[test]
    fn test_walking_rejects_zero_height() {
        let err = SportsWalking::new(record(100.0, 1.0, 70.0), 0.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "height_cm",
                ..
            }
        ));
    }

    #[test]
    fn test_swimming_rejects_zero_pool_lengths() {
        assert!(Swimming::new(record(100.0, 1.0, 70.0), 25.0, 0.0).is_err());
        assert!(Swimming::new(record(100.0, 1.0, 70.0), 0.0, 10.0).is_err());
    }
}

// ABOUTME: Unified error handling with standard error codes for the workout tracker
// ABOUTME: Defines ErrorCode, AppError, and conversions from domain-specific errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure in the tracker ends up as an [`AppError`] carrying a stable
//! [`ErrorCode`]. Domain errors ([`WorkoutError`], [`ConfigError`]) convert into
//! it with `?`, so callers only ever match on one type at the boundary.
//!
//! All failures are deterministic functions of the input. Nothing in the
//! tracker retries.

/// Configuration error types
pub mod config;
/// Workout construction and dispatch errors
pub mod workout;

pub use config::ConfigError;
pub use workout::WorkoutError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Dispatch (1000-1999)
    /// No workout variant is registered for the type code
    UnknownWorkoutType = 1000,
    /// The reading list length does not match the variant's fields
    InvalidArgumentCount = 1001,
    /// A reading violates a variant invariant (e.g. zero duration)
    InvalidReading = 1002,

    // Input (3000-3999)
    /// Input packages could not be parsed
    InvalidFormat = 3000,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// Reading input or writing output failed
    IoError = 9000,
    /// Serializing a summary failed
    SerializationError = 9001,
}

impl ErrorCode {
    /// Process exit code reported by the CLI for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // Bad data in the workout stream
            Self::UnknownWorkoutType | Self::InvalidArgumentCount | Self::InvalidReading => 65,
            Self::InvalidFormat => 66,
            Self::ConfigInvalid => 78,
            Self::IoError | Self::SerializationError => 74,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "Unknown workout type",
            Self::InvalidArgumentCount => "Wrong number of readings for workout type",
            Self::InvalidReading => "Reading value is invalid",
            Self::InvalidFormat => "The input data format is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::IoError => "I/O operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Stable machine-readable name, matching the serde representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "UNKNOWN_WORKOUT_TYPE",
            Self::InvalidArgumentCount => "INVALID_ARGUMENT_COUNT",
            Self::InvalidReading => "INVALID_READING",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::IoError => "IO_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Prefix the message with where the error happened (e.g. `package #2`)
    #[must_use]
    pub fn with_context_message(mut self, context: impl AsRef<str>) -> Self {
        self.message = format!("{}: {}", context.as_ref(), self.message);
        self
    }

    /// Invalid input format
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Get the process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<WorkoutError> for AppError {
    fn from(error: WorkoutError) -> Self {
        let code = match &error {
            WorkoutError::UnknownWorkoutType { .. } => ErrorCode::UnknownWorkoutType,
            WorkoutError::InvalidArgumentCount { .. } => ErrorCode::InvalidArgumentCount,
            WorkoutError::InvalidReading { .. } => ErrorCode::InvalidReading,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::IoError, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_format(error.to_string()).with_source(error)
    }
}

// ABOUTME: Output format abstraction for rendering workout summaries
// ABOUTME: Supports the fixed human-readable text line (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! A [`Summary`] renders either as the fixed text template
//!
//! ```text
//! Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.
//! ```
//!
//! or as a single-line JSON object with every metric rounded to 3 decimals.
//!
//! ## Usage
//!
//! ```rust
//! use workout_tracker::formatters::{format_summary, OutputFormat};
//! use workout_tracker::intelligence::construct;
//!
//! let summary = construct("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?.summary();
//! let output = format_summary(&summary, OutputFormat::Text)?;
//! assert!(output.data.starts_with("Workout type: Swimming;"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::{AppError, ConfigError, ErrorCode};
use crate::intelligence::Summary;

/// Decimal places shown for every numeric summary field
const DISPLAY_DECIMALS: i32 = 3;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable message line (default)
    #[default]
    Text,
    /// Single-line JSON object per workout
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Parse(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Formatted output containing the rendered summary and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// The rendered line
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

/// Render a summary as the fixed human-readable message line
#[must_use]
pub fn format_message(summary: &Summary) -> String {
    summary.to_string()
}

/// JSON view of a summary with display rounding applied
#[derive(Serialize)]
struct RoundedSummary<'a> {
    workout_type: &'a str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl<'a> From<&'a Summary> for RoundedSummary<'a> {
    fn from(summary: &'a Summary) -> Self {
        Self {
            workout_type: &summary.workout_label,
            duration_hours: round_display(summary.duration_hours),
            distance_km: round_display(summary.distance_km),
            mean_speed_kmh: round_display(summary.mean_speed_kmh),
            calories_kcal: round_display(summary.calories_kcal),
        }
    }
}

/// Round half away from zero to the display precision
fn round_display(value: f64) -> f64 {
    let scale = 10_f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_summary(
    summary: &Summary,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format_message(summary),
        OutputFormat::Json => {
            serde_json::to_string(&RoundedSummary::from(summary)).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

// ABOUTME: Environment-based configuration for the workout tracker
// ABOUTME: Parses output format, unknown workout type policy, and input source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment configuration
//!
//! | Variable                 | Values          | Default  |
//! |--------------------------|-----------------|----------|
//! | `WORKOUT_OUTPUT_FORMAT`  | `text`, `json`  | `text`   |
//! | `WORKOUT_UNKNOWN_POLICY` | `fail`, `skip`  | `fail`   |
//! | `WORKOUT_INPUT`          | path, or `-`    | samples  |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::env_vars;
use crate::errors::ConfigError;
use crate::formatters::OutputFormat;

/// What to do with a package whose workout type code is not registered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Stop the run and surface the error
    #[default]
    Fail,
    /// Log a warning and continue with the next package
    Skip,
}

impl UnknownTypePolicy {
    /// Parse from string with fallback to [`UnknownTypePolicy::Fail`]
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for UnknownTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for UnknownTypePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" | "strict" => Ok(Self::Fail),
            "skip" | "ignore" => Ok(Self::Skip),
            other => Err(ConfigError::Parse(format!(
                "unknown workout type policy '{other}' (expected 'fail' or 'skip')"
            ))),
        }
    }
}

/// Where reading packages come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// JSON read from standard input
    Stdin,
    /// JSON file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret a path argument; `-` means standard input
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// Rendering format for each summary
    pub output_format: OutputFormat,
    /// Handling of unregistered workout type codes
    pub unknown_type_policy: UnknownTypePolicy,
    /// Package source; `None` processes the built-in sample packages
    pub input: Option<InputSource>,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds non-unicode data or a value
    /// that does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let output_format = match env_var_opt(env_vars::OUTPUT_FORMAT)? {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let unknown_type_policy = match env_var_opt(env_vars::UNKNOWN_POLICY)? {
            Some(value) => value.parse()?,
            None => UnknownTypePolicy::default(),
        };
        let input = env_var_opt(env_vars::INPUT)?.map(|value| InputSource::from_arg(&value));

        let config = Self {
            output_format,
            unknown_type_policy,
            input,
        };
        debug!(
            config.output_format = %config.output_format,
            config.unknown_type_policy = %config.unknown_type_policy,
            "Tracker configuration loaded from environment"
        );
        Ok(config)
    }
}

/// Read an optional environment variable, treating empty values as unset
fn env_var_opt(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

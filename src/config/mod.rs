// ABOUTME: Configuration management module for tracker settings
// ABOUTME: Loads output format, unknown-type policy, and input source from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the workout tracker
//!
//! Configuration is environment-only; the CLI layers its flags on top of
//! [`TrackerConfig::from_env`].

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::{InputSource, TrackerConfig, UnknownTypePolicy};

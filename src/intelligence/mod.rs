// ABOUTME: Workout calculation engine with variant formulas and code-based dispatch
// ABOUTME: Exposes the Training contract, the three workout variants, and the dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout intelligence
//!
//! - [`training`]: the [`Training`] contract, the [`Running`], [`SportsWalking`]
//!   and [`Swimming`] variants, and the closed [`Workout`] sum type
//! - [`dispatch`]: maps a sensor code and readings to a [`Workout`]
//! - [`physiological_constants`]: the coefficients behind every formula

/// Code-to-constructor dispatch
pub mod dispatch;
/// Per-variant coefficients
pub mod physiological_constants;
/// Training contract and workout variants
pub mod training;

pub use dispatch::{construct, registered_codes};
pub use training::{
    Running, SportsWalking, Summary, Swimming, Training, Workout, WorkoutRecord,
};

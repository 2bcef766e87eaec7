// ABOUTME: Reading package loading and in-order processing into formatted summaries
// ABOUTME: Applies the unknown workout type policy and surfaces every other error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Package processing
//!
//! Packages are processed one at a time, in input order. Each package
//! produces exactly one summary line or an error.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use tracing::{info, info_span, warn};

use crate::config::{InputSource, TrackerConfig, UnknownTypePolicy};
use crate::errors::{AppError, AppResult, WorkoutError};
use crate::formatters::{format_summary, FormattedOutput};
use crate::intelligence::construct;
use crate::models::ReadingPackage;

/// Result of processing a batch of packages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// One rendered summary per dispatched package, in input order
    pub outputs: Vec<FormattedOutput>,
    /// Type codes of packages skipped under [`UnknownTypePolicy::Skip`]
    pub skipped: Vec<String>,
}

/// The built-in sample packages processed when no input is given
#[must_use]
pub fn sample_packages() -> Vec<ReadingPackage> {
    vec![
        ReadingPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ReadingPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of reading packages
///
/// ```json
/// [{"workout_type": "RUN", "readings": [15000, 1, 75]}]
/// ```
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the input is not a valid package array
pub fn load_packages<R: Read>(reader: R) -> AppResult<Vec<ReadingPackage>> {
    let packages: Vec<ReadingPackage> = serde_json::from_reader(reader)?;
    Ok(packages)
}

/// Load packages from the configured source, or the samples if none is set
///
/// # Errors
///
/// Returns an `IoError` if the file cannot be opened, or an `InvalidFormat`
/// error if its contents do not parse
pub fn load_from_source(source: Option<&InputSource>) -> AppResult<Vec<ReadingPackage>> {
    match source {
        None => Ok(sample_packages()),
        Some(InputSource::Stdin) => load_packages(io::stdin().lock()),
        Some(InputSource::File(path)) => {
            let file = File::open(path).map_err(|e| {
                AppError::from(e).with_context_message(format!("opening {}", path.display()))
            })?;
            load_packages(BufReader::new(file))
        }
    }
}

/// Dispatch and render every package in order, collecting the outputs
///
/// # Errors
///
/// Stops at the first package that fails to construct, except for unknown
/// type codes under [`UnknownTypePolicy::Skip`], which are logged and skipped
pub fn process_packages(
    packages: &[ReadingPackage],
    config: &TrackerConfig,
) -> AppResult<ProcessReport> {
    let mut outputs = Vec::with_capacity(packages.len());
    let skipped = process_packages_with(packages, config, |output| {
        outputs.push(output);
        Ok(())
    })?;
    Ok(ProcessReport { outputs, skipped })
}

/// Dispatch every package in order, writing each summary line to `out` as
/// soon as it is rendered
///
/// Lines for packages before a failing one are written and flushed before
/// the error is returned.
///
/// # Errors
///
/// Same as [`process_packages`], plus an `IoError` if writing fails
pub fn write_packages<W: Write>(
    packages: &[ReadingPackage],
    config: &TrackerConfig,
    out: &mut W,
) -> AppResult<Vec<String>> {
    let result = process_packages_with(packages, config, |output| {
        writeln!(out, "{}", output.data)?;
        Ok(())
    });
    out.flush()?;
    result
}

/// Dispatch every package in order, handing each rendered summary to `emit`
///
/// Returns the type codes skipped under [`UnknownTypePolicy::Skip`].
///
/// # Errors
///
/// Stops at the first package that fails to construct (unknown codes excepted
/// under the skip policy) or the first error returned by `emit`
pub fn process_packages_with<F>(
    packages: &[ReadingPackage],
    config: &TrackerConfig,
    mut emit: F,
) -> AppResult<Vec<String>>
where
    F: FnMut(FormattedOutput) -> AppResult<()>,
{
    let span = info_span!("process_packages", packages = packages.len());
    let _guard = span.enter();

    let mut processed = 0_usize;
    let mut skipped = Vec::new();
    for (index, package) in packages.iter().enumerate() {
        let workout = match construct(&package.workout_type, &package.readings) {
            Ok(workout) => workout,
            Err(WorkoutError::UnknownWorkoutType { code })
                if config.unknown_type_policy == UnknownTypePolicy::Skip =>
            {
                warn!(
                    package.index = index,
                    workout.code = %code,
                    "Skipping package with unknown workout type"
                );
                skipped.push(code);
                continue;
            }
            Err(error) => {
                return Err(AppError::from(error)
                    .with_context_message(format!("package #{index}")));
            }
        };

        emit(format_summary(&workout.summary(), config.output_format)?)?;
        processed += 1;
    }

    info!(
        processed,
        skipped = skipped.len(),
        "Finished processing workout packages"
    );
    Ok(skipped)
}

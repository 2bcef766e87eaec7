// ABOUTME: Workout tracker CLI - prints one summary line per workout reading package
// ABOUTME: Reads packages from a JSON file, stdin, or the built-in samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Process the built-in sample packages
//! workout-tracker
//!
//! # Process a JSON file of packages, as JSON lines
//! workout-tracker --input packages.json --format json
//!
//! # Read packages from stdin and skip unknown workout types
//! cat packages.json | workout-tracker --input - --skip-unknown
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use workout_tracker::{
    config::{InputSource, TrackerConfig, UnknownTypePolicy},
    errors::AppResult,
    formatters::OutputFormat,
    logging::LoggingConfig,
    packages::{load_from_source, write_packages},
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Compute distance, mean speed and calories from workout sensor readings",
    long_about = "Reads (type_code, readings) packages and prints one summary line per workout. \
                  Supported codes: RUN, WLK, SWM."
)]
struct Cli {
    /// JSON file of reading packages (`-` for stdin); defaults to the built-in samples
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Skip packages with unknown workout types instead of failing
    #[arg(long)]
    skip_unknown: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = TrackerConfig::from_env()?;
    if let Some(input) = cli.input.as_deref() {
        config.input = Some(InputSource::from_arg(input));
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.skip_unknown {
        config.unknown_type_policy = UnknownTypePolicy::Skip;
    }

    let source = config
        .input
        .as_ref()
        .map_or_else(|| "built-in samples".to_owned(), ToString::to_string);
    info!(input = %source, format = %config.output_format, "Loading workout packages");

    let packages = load_from_source(config.input.as_ref())?;
    let mut out = io::stdout().lock();
    write_packages(&packages, &config, &mut out)?;

    Ok(())
}

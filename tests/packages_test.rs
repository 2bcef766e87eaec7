// ABOUTME: Integration tests for package loading and processing
// ABOUTME: Validates input order, unknown type policies, and JSON input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;

use common::init_test_logging;
use tempfile::NamedTempFile;
use workout_tracker::config::{InputSource, TrackerConfig, UnknownTypePolicy};
use workout_tracker::errors::ErrorCode;
use workout_tracker::formatters::OutputFormat;
use workout_tracker::models::ReadingPackage;
use workout_tracker::packages::{
    load_from_source, load_packages, process_packages, sample_packages, write_packages,
};

fn skip_config() -> TrackerConfig {
    TrackerConfig {
        unknown_type_policy: UnknownTypePolicy::Skip,
        ..TrackerConfig::default()
    }
}

#[test]
fn test_samples_render_in_input_order() {
    init_test_logging();
    let report = process_packages(&sample_packages(), &TrackerConfig::default()).unwrap();

    let lines: Vec<&str> = report.outputs.iter().map(|o| o.data.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 1.000 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
    assert!(report.skipped.is_empty());
}

#[test]
fn test_unknown_type_fails_by_default() {
    init_test_logging();
    let packages = vec![
        ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ReadingPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
    ];

    let err = process_packages(&packages, &TrackerConfig::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    assert!(err.message.starts_with("package #1"));
}

#[test]
fn test_write_packages_keeps_lines_before_failure() {
    init_test_logging();
    let packages = vec![
        ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ReadingPackage::new("XYZ", vec![1.0]),
        ReadingPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];
    let mut out = Vec::new();

    let err = write_packages(&packages, &TrackerConfig::default(), &mut out).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownWorkoutType);

    let written = String::from_utf8(out).unwrap();
    assert_eq!(
        written,
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.\n"
    );
}

#[test]
fn test_write_packages_reports_skipped_codes() {
    init_test_logging();
    let packages = vec![
        ReadingPackage::new("XYZ", vec![1.0]),
        ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];
    let mut out = Vec::new();

    let skipped = write_packages(&packages, &skip_config(), &mut out).unwrap();
    assert_eq!(skipped, vec!["XYZ".to_owned()]);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_unknown_type_is_skipped_under_skip_policy() {
    init_test_logging();
    let packages = vec![
        ReadingPackage::new("XYZ", vec![1.0]),
        ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ReadingPackage::new("BIKE", vec![]),
    ];

    let report = process_packages(&packages, &skip_config()).unwrap();
    assert_eq!(report.outputs.len(), 1);
    assert!(report.outputs[0].data.starts_with("Workout type: Running;"));
    assert_eq!(report.skipped, vec!["XYZ".to_owned(), "BIKE".to_owned()]);
}

#[test]
fn test_skip_policy_still_fails_on_bad_reading_count() {
    init_test_logging();
    let packages = vec![ReadingPackage::new("RUN", vec![15000.0, 1.0])];

    let err = process_packages(&packages, &skip_config()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgumentCount);
}

#[test]
fn test_json_output_format() {
    init_test_logging();
    let config = TrackerConfig {
        output_format: OutputFormat::Json,
        ..TrackerConfig::default()
    };
    let report = process_packages(&sample_packages(), &config).unwrap();

    for output in &report.outputs {
        let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
        assert!(value["workout_type"].is_string());
    }
}

#[test]
fn test_load_packages_from_json() {
    let json = r#"[
        {"workout_type": "SWM", "readings": [720, 1, 80, 25, 40]},
        {"workout_type": "RUN", "readings": [15000, 1, 75]}
    ]"#;

    let packages = load_packages(json.as_bytes()).unwrap();
    assert_eq!(
        packages,
        vec![
            ReadingPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            ReadingPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        ]
    );
}

#[test]
fn test_load_packages_rejects_malformed_json() {
    let err = load_packages(r#"{"workout_type": "RUN"}"#.as_bytes()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_load_from_file_source() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"workout_type": "WLK", "readings": [9000, 1, 75, 180]}}]"#
    )
    .unwrap();

    let source = InputSource::File(file.path().to_path_buf());
    let packages = load_from_source(Some(&source)).unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].workout_type, "WLK");
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let source = InputSource::File("/nonexistent/workouts.json".into());
    let err = load_from_source(Some(&source)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IoError);
}

#[test]
fn test_no_source_means_samples() {
    assert_eq!(load_from_source(None).unwrap(), sample_packages());
}

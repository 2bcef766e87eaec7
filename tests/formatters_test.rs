// ABOUTME: Unit tests for summary formatting
// ABOUTME: Validates the fixed text template and the JSON rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use serde_json::Value;
use workout_tracker::formatters::{format_message, format_summary, OutputFormat};
use workout_tracker::intelligence::{construct, Summary};

fn summary(code: &str, readings: &[f64]) -> Summary {
    construct(code, readings).unwrap().summary()
}

#[test]
fn test_running_message_matches_template() {
    let message = format_message(&summary("RUN", &[15000.0, 1.0, 75.0]));
    assert_eq!(
        message,
        "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Avg speed: 9.750 km/h; Calories burned: 699.750."
    );
}

#[test]
fn test_swimming_and_walking_messages() {
    assert_eq!(
        format_message(&summary("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])),
        "Workout type: Swimming; Duration: 1.000 h; Distance: 1.000 km; \
         Avg speed: 1.000 km/h; Calories burned: 336.000."
    );
    assert_eq!(
        format_message(&summary("WLK", &[9000.0, 1.0, 75.0, 180.0])),
        "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
         Avg speed: 5.850 km/h; Calories burned: 157.500."
    );
}

#[test]
fn test_fields_render_with_three_decimals() {
    let summary = Summary {
        workout_label: "Running".into(),
        duration_hours: 1.234_56,
        distance_km: 2.0,
        mean_speed_kmh: 0.000_4,
        calories_kcal: 12.345_678,
    };
    assert_eq!(
        format_message(&summary),
        "Workout type: Running; Duration: 1.235 h; Distance: 2.000 km; \
         Avg speed: 0.000 km/h; Calories burned: 12.346."
    );
}

#[test]
fn test_display_matches_format_message() {
    let summary = summary("RUN", &[15000.0, 1.0, 75.0]);
    assert_eq!(summary.to_string(), format_message(&summary));
}

#[test]
fn test_text_output_metadata() {
    let output = format_summary(&summary("RUN", &[15000.0, 1.0, 75.0]), OutputFormat::Text).unwrap();
    assert_eq!(output.format, OutputFormat::Text);
    assert_eq!(output.content_type, "text/plain");
    assert!(output.data.ends_with("Calories burned: 699.750."));
}

#[test]
fn test_json_output_is_rounded() {
    let output =
        format_summary(&summary("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]), OutputFormat::Json)
            .unwrap();
    assert_eq!(output.content_type, "application/json");

    let value: Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["workout_type"], "Swimming");
    assert_eq!(value["duration_hours"].as_f64().unwrap(), 1.0);
    assert_eq!(value["mean_speed_kmh"].as_f64().unwrap(), 1.0);
    assert_eq!(value["calories_kcal"].as_f64().unwrap(), 336.0);
    assert!(!output.data.contains('\n'));
}

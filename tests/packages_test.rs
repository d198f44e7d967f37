// ABOUTME: Integration tests for sensor package dispatch to workout records
// ABOUTME: Covers supported codes, unknown codes, and field count mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging};
use training_stats::errors::ErrorCode;
use training_stats::intelligence::Training;
use training_stats::models::{Workout, WorkoutType};
use training_stats::packages::{default_packages, read_package, read_packages, SensorPackage};

fn assert_lists_supported_codes(message: &str) {
    for code in ["SWM", "RUN", "WLK"] {
        assert!(message.contains(code), "'{message}' should list {code}");
    }
}

#[test]
fn test_each_code_builds_matching_variant() {
    init_test_logging();

    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

    assert!(matches!(swim, Workout::Swimming(_)));
    assert!(matches!(run, Workout::Running(_)));
    assert!(matches!(walk, Workout::SportsWalking(_)));
}

#[test]
fn test_swimming_with_three_fields_is_unsupported() {
    init_test_logging();

    let error = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();

    assert_eq!(error.code, ErrorCode::UnsupportedWorkoutType);
    assert_lists_supported_codes(&error.message);
    assert_eq!(error.details["reason"], "arity_mismatch");
}

#[test]
fn test_unknown_code_is_unsupported() {
    init_test_logging();

    let error = read_package("XYZ", &[15000.0, 1.0, 75.0]).unwrap_err();

    assert_eq!(error.code, ErrorCode::UnsupportedWorkoutType);
    assert_lists_supported_codes(&error.message);
    assert_eq!(error.details["reason"], "unknown_code");
    assert_eq!(error.details["workout_type"], "XYZ");
}

#[test]
fn test_unknown_code_and_arity_share_message() {
    let unknown = read_package("XYZ", &[]).unwrap_err();
    let arity = read_package("RUN", &[]).unwrap_err();

    assert_eq!(unknown.code, arity.code);
    assert_eq!(unknown.message, arity.message);
}

#[test]
fn test_every_code_rejects_each_wrong_arity() {
    let data = [1.0; 6];

    for kind in WorkoutType::ALL {
        for len in 0..=data.len() {
            let result = read_package(kind.code(), &data[..len]);
            if len == kind.arity() {
                assert!(result.is_ok(), "{} should accept {len} fields", kind.code());
            } else {
                assert_eq!(
                    result.unwrap_err().code,
                    ErrorCode::UnsupportedWorkoutType,
                    "{} should reject {len} fields",
                    kind.code()
                );
            }
        }
    }
}

#[test]
fn test_dispatched_workout_computes_reference_calories() {
    let workouts = read_packages(&default_packages()).unwrap();
    let calories: Vec<f64> = workouts
        .iter()
        .map(|workout| workout.get_spent_calories().unwrap())
        .collect();

    assert_close(calories[0], 336.0, 1e-6);
    assert_close(calories[1], 699.75, 1e-6);
    assert_close(calories[2], 157.5, 1e-6);
}

#[test]
fn test_read_packages_stops_at_first_failure() {
    let packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("BIKE", vec![1.0, 1.0, 1.0]),
    ];

    let error = read_packages(&packages).unwrap_err();
    assert_eq!(error.details["workout_type"], "BIKE");
}

#[test]
fn test_fractional_pool_count_rejected() {
    let error = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("count_pool"));
}

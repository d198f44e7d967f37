// ABOUTME: Sensor package reader that turns a type code and raw numbers into a workout
// ABOUTME: Validates field count per workout type before constructing the record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Packages
//!
//! Sensors report a workout as a short type code plus a flat list of numbers.
//! The numbers are assigned positionally: `action`, `duration`, `weight`, then
//! the fields specific to the workout type (see [`WorkoutType::field_names`]).
//!
//! An unknown code and a wrong number of fields are reported as the same
//! error kind, `ErrorCode::UnsupportedWorkoutType`, listing every supported
//! code. The actual cause is kept in the error details.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use training_core::errors::{AppError, AppResult};
use training_core::models::{Running, SportsWalking, Swimming, Workout, WorkoutType};

/// Raw workout reading as delivered by a sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional numeric fields
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a sensor package
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the workout record described by this package
    ///
    /// # Errors
    ///
    /// See [`read_package`]
    pub fn read(&self) -> AppResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Reference readings: one pool swim, one run, one walk
#[must_use]
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read sensor data into a workout record
///
/// # Errors
///
/// Returns `ErrorCode::UnsupportedWorkoutType` if the code is unknown or the
/// number of fields does not match the workout type, and
/// `ErrorCode::InvalidInput` if a field value violates the record invariants
/// (non-positive duration, fractional step count, ...)
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Workout> {
    let kind = workout_type.parse::<WorkoutType>().inspect_err(|_| {
        warn!(
            workout.code = %workout_type,
            "Unknown workout type code in sensor package"
        );
    })?;

    let workout = match (kind, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(whole_number("action", action)?, duration, weight)?.into()
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(whole_number("action", action)?, duration, weight, height)?.into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let count_pool = u32::try_from(whole_number("count_pool", count_pool)?)
                .map_err(|_| AppError::invalid_input(format!("count_pool {count_pool} is too large")))?;
            Swimming::new(
                whole_number("action", action)?,
                duration,
                weight,
                length_pool,
                count_pool,
            )?
            .into()
        }
        _ => {
            warn!(
                workout.code = %workout_type,
                expected = kind.arity(),
                received = data.len(),
                "Sensor package field count does not match workout type"
            );
            return Err(
                AppError::unsupported_workout_type(&WorkoutType::supported_codes()).with_details(
                    json!({
                        "reason": "arity_mismatch",
                        "workout_type": workout_type,
                        "expected_fields": kind.field_names(),
                        "received": data.len(),
                    }),
                ),
            );
        }
    };

    debug!(workout.code = %workout_type, "Sensor package read");
    Ok(workout)
}

/// Read every package, stopping at the first failure
///
/// # Errors
///
/// Returns the error of the first package that cannot be read
pub fn read_packages(packages: &[SensorPackage]) -> AppResult<Vec<Workout>> {
    packages.iter().map(SensorPackage::read).collect()
}

/// Convert a reading that must be a whole, non-negative count
fn whole_number(field: &str, value: f64) -> AppResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() > 0.0 || value >= u64::MAX as f64 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a whole non-negative number, got {value}"
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use training_core::errors::ErrorCode;

    #[test]
    fn test_positional_assignment() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        let Workout::Swimming(swimming) = workout else {
            panic!("expected swimming, got {workout:?}");
        };
        assert_eq!(swimming.data().action(), 720);
        assert!((swimming.length_pool() - 25.0).abs() < f64::EPSILON);
        assert_eq!(swimming.count_pool(), 40);
    }

    #[test]
    fn test_arity_mismatch_details() {
        let error = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();

        assert_eq!(error.code, ErrorCode::UnsupportedWorkoutType);
        assert_eq!(error.details["reason"], "arity_mismatch");
        assert_eq!(error.details["received"], 3);
        assert_eq!(error.details["expected_fields"][3], "height");
    }

    #[test]
    fn test_too_many_fields_rejected() {
        let error = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnsupportedWorkoutType);
    }

    #[test]
    fn test_fractional_action_rejected() {
        let error = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("action"));
    }

    #[test]
    fn test_count_beyond_u64_rejected() {
        // u64::MAX rounds up to 2^64 as f64, one past the largest whole count
        let error = read_package("RUN", &[2_f64.powi(64), 1.0, 75.0]).unwrap_err();

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("action"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let error = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_default_packages_all_read() {
        let workouts = read_packages(&default_packages()).unwrap();
        let kinds: Vec<_> = workouts.iter().map(Workout::workout_type).collect();

        assert_eq!(
            kinds,
            vec![
                WorkoutType::Swimming,
                WorkoutType::Running,
                WorkoutType::SportsWalking
            ]
        );
    }

    #[test]
    fn test_sensor_package_deserializes() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"workout_type":"RUN","data":[15000,1,75]}"#).unwrap();

        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert!(package.read().is_ok());
    }
}

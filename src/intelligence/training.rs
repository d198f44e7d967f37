// ABOUTME: Training trait with the shared distance and mean speed formulas
// ABOUTME: Builds InfoMessage summaries and dispatches the Workout sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use training_core::constants::calories::LAND_STEP_LENGTH_M;
use training_core::constants::units::M_IN_KM;
use training_core::errors::{AppError, AppResult};
use training_core::models::{InfoMessage, TrainingData, Workout};

/// Statistics every workout record can compute
///
/// Implementors provide their common fields and display name. Distance and
/// mean speed have default formulas; the calorie formula must be supplied by
/// each workout type; the default reports it as not implemented.
pub trait Training {
    /// Common workout fields
    fn data(&self) -> &TrainingData;

    /// Display name used in the summary
    fn training_type(&self) -> &'static str;

    /// Distance covered per action, in meters
    fn len_step(&self) -> f64 {
        LAND_STEP_LENGTH_M
    }

    /// Distance in kilometers: `action x len_step / 1000`
    fn get_distance(&self) -> f64 {
        self.data().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h: `distance / duration`
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.data().duration()
    }

    /// Calories burned during the workout
    ///
    /// # Errors
    ///
    /// The default implementation always returns an `ErrorCode::NotImplemented`
    /// error naming the workout type
    fn get_spent_calories(&self) -> AppResult<f64> {
        Err(AppError::not_implemented(
            "get_spent_calories",
            self.training_type(),
        ))
    }

    /// Compute every statistic and collect them in an [`InfoMessage`]
    ///
    /// # Errors
    ///
    /// Returns an error if the calorie formula is not implemented
    fn show_training_info(&self) -> AppResult<InfoMessage> {
        let info = InfoMessage {
            training_type: self.training_type().to_owned(),
            duration: self.data().duration(),
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories()?,
        };

        debug!(
            training.name = %info.training_type,
            training.distance_km = info.distance,
            training.speed_kmh = info.speed,
            training.calories = info.calories,
            "Training statistics computed"
        );

        Ok(info)
    }
}

impl Training for Workout {
    fn data(&self) -> &TrainingData {
        Self::data(self)
    }

    fn training_type(&self) -> &'static str {
        self.workout_type().display_name()
    }

    fn len_step(&self) -> f64 {
        match self {
            Self::Running(running) => running.len_step(),
            Self::SportsWalking(walking) => walking.len_step(),
            Self::Swimming(swimming) => swimming.len_step(),
        }
    }

    fn get_distance(&self) -> f64 {
        match self {
            Self::Running(running) => running.get_distance(),
            Self::SportsWalking(walking) => walking.get_distance(),
            Self::Swimming(swimming) => swimming.get_distance(),
        }
    }

    fn get_mean_speed(&self) -> f64 {
        match self {
            Self::Running(running) => running.get_mean_speed(),
            Self::SportsWalking(walking) => walking.get_mean_speed(),
            Self::Swimming(swimming) => swimming.get_mean_speed(),
        }
    }

    fn get_spent_calories(&self) -> AppResult<f64> {
        match self {
            Self::Running(running) => running.get_spent_calories(),
            Self::SportsWalking(walking) => walking.get_spent_calories(),
            Self::Swimming(swimming) => swimming.get_spent_calories(),
        }
    }
}

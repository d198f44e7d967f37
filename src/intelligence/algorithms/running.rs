// ABOUTME: Running calorie algorithm based on mean speed and body weight
// ABOUTME: Uses the empirical (18 x speed - 20) coefficient pair without clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use training_core::constants::calories::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use training_core::constants::units::{MINUTES_IN_HOUR, M_IN_KM};
use training_core::errors::AppResult;
use training_core::models::{Running, TrainingData};

use crate::intelligence::Training;

impl Training for Running {
    fn data(&self) -> &TrainingData {
        Self::data(self)
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    /// Formula: `(18 x speed - 20) x weight / 1000 x duration_min`
    ///
    /// Speeds below 20/18 km/h yield negative calories, which are returned as-is.
    fn get_spent_calories(&self) -> AppResult<f64> {
        let data = self.data();
        let duration_in_min = data.duration() * MINUTES_IN_HOUR;
        Ok(
            SPEED_MULTIPLIER.mul_add(self.get_mean_speed(), -SPEED_SHIFT) * data.weight()
                / M_IN_KM
                * duration_in_min,
        )
    }
}

// ABOUTME: Swimming speed and calorie algorithm driven by pool laps
// ABOUTME: Mean speed comes from pool length x lap count rather than stroke count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use training_core::constants::calories::swimming::{
    SPEED_SHIFT, STROKE_LENGTH_M, WEIGHT_MULTIPLIER,
};
use training_core::constants::units::M_IN_KM;
use training_core::errors::AppResult;
use training_core::models::{Swimming, TrainingData};

use crate::intelligence::Training;

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        Self::data(self)
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// Formula: `length_pool x count_pool / 1000 / duration`
    fn get_mean_speed(&self) -> f64 {
        self.length_pool() * f64::from(self.count_pool()) / M_IN_KM / self.data().duration()
    }

    /// Formula: `(speed + 1.1) x 2 x weight`
    fn get_spent_calories(&self) -> AppResult<f64> {
        Ok((self.get_mean_speed() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.data().weight())
    }
}

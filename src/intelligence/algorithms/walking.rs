// ABOUTME: Sports walking calorie algorithm using weight, speed, and height
// ABOUTME: Quantizes the speed-squared over height term with floor division
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use training_core::constants::calories::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use training_core::constants::units::MINUTES_IN_HOUR;
use training_core::errors::AppResult;
use training_core::models::{SportsWalking, TrainingData};

use crate::intelligence::Training;

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        Self::data(self)
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    /// Formula: `(0.035 x weight + (speed^2 // height) x 0.029 x weight) x duration_min`
    fn get_spent_calories(&self) -> AppResult<f64> {
        let data = self.data();
        let speed = self.get_mean_speed();
        let duration_in_min = data.duration() * MINUTES_IN_HOUR;
        // Floor division; both operands are non-negative
        let speed_height_ratio = (speed * speed).div_euclid(self.height());

        Ok(WEIGHT_MULTIPLIER.mul_add(
            data.weight(),
            speed_height_ratio * SPEED_HEIGHT_MULTIPLIER * data.weight(),
        ) * duration_in_min)
    }
}

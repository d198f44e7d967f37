// ABOUTME: Immutable workout records built from raw sensor readings
// ABOUTME: Running, SportsWalking, and Swimming records plus the closed Workout sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::WorkoutType;
use crate::errors::{AppError, AppResult};

/// Fields shared by every workout record
///
/// `action` counts steps on land and strokes in the pool. `duration` is in
/// hours and always strictly positive, `weight` is in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingData {
    action: u64,
    duration: f64,
    weight: f64,
}

impl TrainingData {
    /// Create the common workout fields
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `duration` is not a positive finite
    /// number or `weight` is negative or not finite
    pub fn new(action: u64, duration: f64, weight: f64) -> AppResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Duration must be a positive number of hours, got {duration}"
            )));
        }
        ensure_non_negative("weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    /// Steps or strokes performed
    #[must_use]
    pub const fn action(&self) -> u64 {
        self.action
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    #[serde(flatten)]
    data: TrainingData,
}

impl Running {
    /// Create a running record
    ///
    /// # Errors
    ///
    /// Returns an error if the common fields are invalid
    pub fn new(action: u64, duration: f64, weight: f64) -> AppResult<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
        })
    }

    /// Common workout fields
    #[must_use]
    pub const fn data(&self) -> &TrainingData {
        &self.data
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    #[serde(flatten)]
    data: TrainingData,
    height: f64,
}

impl SportsWalking {
    /// Create a sports walking record
    ///
    /// # Errors
    ///
    /// Returns an error if the common fields are invalid or `height` is not a
    /// positive finite number of centimeters
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> AppResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be a positive number of centimeters, got {height}"
            )));
        }
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            height,
        })
    }

    /// Common workout fields
    #[must_use]
    pub const fn data(&self) -> &TrainingData {
        &self.data
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    #[serde(flatten)]
    data: TrainingData,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming record
    ///
    /// # Errors
    ///
    /// Returns an error if the common fields are invalid or `length_pool` is
    /// negative or not finite
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> AppResult<Self> {
        ensure_non_negative("length_pool", length_pool)?;
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            length_pool,
            count_pool,
        })
    }

    /// Common workout fields
    #[must_use]
    pub const fn data(&self) -> &TrainingData {
        &self.data
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

/// A workout record of one of the supported types
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "workout_type")]
pub enum Workout {
    /// Running workout
    #[serde(rename = "RUN")]
    Running(Running),
    /// Sports walking workout
    #[serde(rename = "WLK")]
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    #[serde(rename = "SWM")]
    Swimming(Swimming),
}

impl Workout {
    /// Workout type of the wrapped record
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::SportsWalking(_) => WorkoutType::SportsWalking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    /// Common workout fields of the wrapped record
    #[must_use]
    pub const fn data(&self) -> &TrainingData {
        match self {
            Self::Running(running) => running.data(),
            Self::SportsWalking(walking) => walking.data(),
            Self::Swimming(swimming) => swimming.data(),
        }
    }
}

impl From<Running> for Workout {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Workout {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

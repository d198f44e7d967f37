// ABOUTME: Core data models for workout records and training summaries
// ABOUTME: Re-exports workout types, records, and the InfoMessage summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Workout type codes and their field layouts
mod workout_type;

/// Immutable workout records
mod workout;

/// Training summary message
mod summary;

pub use summary::InfoMessage;
pub use workout::{Running, SportsWalking, Swimming, TrainingData, Workout};
pub use workout_type::WorkoutType;

// ABOUTME: Configuration module for runtime settings of the training calculator
// ABOUTME: Environment-only configuration; calorie formulas are fixed and not configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and the runtime configuration
pub mod environment;

pub use environment::{Environment, LogLevel, TrainingConfig};

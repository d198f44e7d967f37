// ABOUTME: Main library entry point for the training statistics calculator
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Stats
//!
//! Computes workout statistics from raw sensor readings and renders a
//! one-line summary per workout.
//!
//! ## Flow
//!
//! 1. [`packages::read_package`] turns a type code (`SWM`, `RUN`, `WLK`) and a
//!    flat list of numbers into a [`models::Workout`].
//! 2. [`intelligence::Training::show_training_info`] computes distance, mean
//!    speed, and calories into a [`models::InfoMessage`].
//! 3. [`formatters::format_summary`] renders it as text, JSON, or TOON.
//!
//! ## Example
//!
//! ```rust
//! use training_stats::intelligence::Training;
//! use training_stats::packages::read_package;
//!
//! # fn main() -> training_stats::errors::AppResult<()> {
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let info = workout.show_training_info()?;
//! assert!(info.get_message().starts_with("Тип тренировки: Running;"));
//! # Ok(())
//! # }
//! ```

/// Runtime configuration loaded from environment variables
pub mod config;

/// Output format abstraction (text, JSON, TOON)
pub mod formatters;

/// Distance, speed, and calorie computations per workout type
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Sensor package reading and workout dispatch
pub mod packages;

/// Unified error handling re-exported from `training-core`
pub use training_core::errors;

/// Formula constants re-exported from `training-core`
pub use training_core::constants;

/// Workout records and summaries re-exported from `training-core`
pub use training_core::models;

// ABOUTME: Core types and constants for the training statistics calculator
// ABOUTME: Foundation crate with error handling, workout records, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Core
//!
//! Foundation crate providing the shared types for the training statistics
//! calculator. Calculation strategies live in the `training_stats` crate; this
//! crate only owns the data they operate on.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and per-workout formula coefficients
//! - **models**: Workout records, workout type codes, and the result summary

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and calorie formula coefficients organized by workout
pub mod constants;

/// Core data models (workout records, `WorkoutType`, `InfoMessage`)
pub mod models;

// ABOUTME: Workout statistics engine computing distance, mean speed, and calories
// ABOUTME: Exposes the Training trait and one calorie algorithm per workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Intelligence
//!
//! The [`Training`] trait supplies the shared distance and speed formulas.
//! Each workout record implements it in [`algorithms`], overriding only what
//! differs: the step length, the mean speed (swimming), and the calorie
//! formula. [`Workout`](training_core::models::Workout) dispatches to the
//! wrapped record.

/// Per-workout calorie algorithms
pub mod algorithms;

/// Shared training computations
mod training;

pub use training::Training;

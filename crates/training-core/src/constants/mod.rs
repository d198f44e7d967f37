// ABOUTME: Application constants for workout calculations organized by domain
// ABOUTME: Unit conversion factors and per-workout calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants for distance and time
pub mod units;

/// Step lengths and calorie formula coefficients per workout type
pub mod calories;

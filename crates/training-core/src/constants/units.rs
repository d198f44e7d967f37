// ABOUTME: Unit conversion constants for distance and time measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
pub const MINUTES_IN_HOUR: f64 = 60.0;

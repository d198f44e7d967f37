// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and reference workout builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `training_stats`

use std::sync::Once;
use training_stats::models::{Running, SportsWalking, Swimming};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference run: 15000 steps in one hour at 75 kg
pub fn reference_run() -> Running {
    Running::new(15000, 1.0, 75.0).unwrap()
}

/// Reference walk: 9000 steps in one hour at 75 kg, 180 cm
pub fn reference_walk() -> SportsWalking {
    SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap()
}

/// Reference swim: 720 strokes in one hour at 80 kg, 40 lengths of a 25 m pool
pub fn reference_swim() -> Swimming {
    Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap()
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

// ABOUTME: Empirical calorie formula coefficients for running, walking, and swimming
// ABOUTME: Step and stroke lengths used to convert action counts into distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Distance covered per step on land (meters)
pub const LAND_STEP_LENGTH_M: f64 = 0.65;

/// Running calorie formula: `(18 x speed - 20) x weight / 1000 x minutes`
pub mod running {
    /// Multiplier applied to mean speed
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking formula: `(0.035 x weight + (speed^2 // height) x 0.029 x weight) x minutes`
pub mod walking {
    /// Weight multiplier for the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Weight multiplier for the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming formula: `(speed + 1.1) x 2 x weight`
pub mod swimming {
    /// Distance covered per stroke (meters)
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

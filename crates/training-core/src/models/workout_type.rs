// ABOUTME: Workout type enumeration keyed by the short sensor type codes
// ABOUTME: Maps SWM/RUN/WLK codes to display names and positional field layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Enumeration of supported workout types
///
/// Each variant is identified on the wire by a three-letter code and expects
/// a fixed, ordered list of numeric fields: the common fields
/// (`action`, `duration`, `weight`) followed by the variant's own fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Pool swimming (`SWM`)
    #[serde(rename = "SWM")]
    Swimming,
    /// Running (`RUN`)
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking (`WLK`)
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    /// Every supported workout type, in the order codes are reported to users
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a workout type by its sensor code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Sensor code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Name shown in the training summary
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Ordered names of the numeric fields this workout type consumes
    #[must_use]
    pub const fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    /// Number of numeric fields this workout type consumes
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.field_names().len()
    }

    /// Codes of all supported workout types
    #[must_use]
    pub fn supported_codes() -> [&'static str; 3] {
        Self::ALL.map(|kind| kind.code())
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            AppError::unsupported_workout_type(&Self::supported_codes()).with_details(
                serde_json::json!({ "reason": "unknown_code", "workout_type": s }),
            )
        })
    }
}

// ABOUTME: Environment configuration for the training statistics calculator
// ABOUTME: Parses log level, deployment environment, and output format from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TRAINING_OUTPUT_FORMAT` | `text` | `text`, `json`, or `toon` |
//! | `ENVIRONMENT` | `development` | `development`, `production`, `testing` |
//! | `RUST_LOG` | `info` | log level or filter directives |
//! | `LOG_FORMAT` | `pretty` | `pretty`, `json`, `compact` |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::debug;
use training_core::errors::AppResult;

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;

/// Environment variable selecting the summary output format
pub const OUTPUT_FORMAT_ENV: &str = "TRAINING_OUTPUT_FORMAT";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output including per-workout statistics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Format used to render summaries
    pub output_format: OutputFormat,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if `TRAINING_OUTPUT_FORMAT` names an
    /// unknown format
    pub fn from_env() -> AppResult<Self> {
        let output_format = env_var_or(OUTPUT_FORMAT_ENV, OutputFormat::Text.as_str()).parse()?;
        let config = Self {
            output_format,
            logging: LoggingConfig::from_env(),
        };

        debug!(
            output.format = %config.output_format,
            environment = %config.logging.environment,
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

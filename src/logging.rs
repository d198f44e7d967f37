// ABOUTME: Logging configuration and structured logging setup for the training calculator
// ABOUTME: Configures log levels and formatters, writing to stderr so stdout stays clean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Summaries are printed to stdout, so every log layer writes to stderr.

use crate::config::environment::{env_var_or, Environment, LogLevel};
use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default service name reported in startup logs
pub const SERVICE_NAME: &str = "training-stats";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level for this crate's targets
    pub level: LogLevel,
    /// Level forced from the command line, applied on top of `RUST_LOG`
    pub level_override: Option<LogLevel>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            level_override: None,
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        // In production, include more detail
        let is_production = environment.is_production();

        Self {
            level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            level_override: None,
            format: LogFormat::from_str_or_default(&env_var_or("LOG_FORMAT", "pretty")),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env_var_or("SERVICE_NAME", SERVICE_NAME),
            service_version: env_var_or("SERVICE_VERSION", env!("CARGO_PKG_VERSION")),
            environment,
        }
    }

    /// Force this crate's targets to `level` regardless of `RUST_LOG`
    pub fn override_level(&mut self, level: LogLevel) {
        self.level = level;
        self.level_override = Some(level);
    }

    /// Build the filter applied to every layer
    ///
    /// `RUST_LOG` directives are honored as-is unless a level override is set,
    /// in which case this crate's directive is replaced. Without `RUST_LOG`,
    /// this crate's targets log at `level` and everything else at `warn`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        match (env::var("RUST_LOG"), self.level_override) {
            (Ok(directives), Some(level)) => {
                EnvFilter::new(directives).add_directive(crate_directive(level))
            }
            (Ok(directives), None) => EnvFilter::new(directives),
            (Err(_), _) => EnvFilter::new("warn").add_directive(crate_directive(self.level)),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Training stats starting up"
        );
    }
}

fn crate_directive(level: LogLevel) -> Directive {
    format!("training_stats={level}")
        .parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, SERVICE_NAME);
        assert!(!config.include_location);
        assert_eq!(config.level_override, None);
    }

    #[test]
    fn test_override_level_sets_both_fields() {
        let mut config = LoggingConfig::default();
        config.override_level(LogLevel::Debug);

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level_override, Some(LogLevel::Debug));
    }
}

// ABOUTME: Output format abstraction for rendering training summaries
// ABOUTME: Supports the fixed text message (default), JSON, and TOON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The text format is the fixed one-line summary produced by
//! [`InfoMessage::get_message`]. JSON and TOON serialize the same five fields
//! for machine consumption.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use training_stats::formatters::{format_summary, OutputFormat};
//! use training_stats::intelligence::Training;
//! use training_stats::packages::read_package;
//!
//! # fn example() -> training_stats::errors::AppResult<()> {
//! let info = read_package("RUN", &[15000.0, 1.0, 75.0])?.show_training_info()?;
//! if let Ok(output) = format_summary(&info, OutputFormat::Json) {
//!     println!("{}", output.data);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use training_core::errors::AppError;
use training_core::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable summary line (default)
    #[default]
    Text,
    /// JSON format
    Json,
    /// TOON format - Token-Oriented Object Notation (requires the `toon` feature)
    Toon,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "toon" => Ok(Self::Toon),
            other => Err(AppError::config(format!(
                "Unknown output format: '{other}'. Valid options: text, json, toon"
            ))),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data as a string
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Render a training summary in the requested format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails
/// - TOON encoding fails, or the crate was built without the `toon` feature
pub fn format_summary(
    info: &InfoMessage,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => info.get_message(),
        OutputFormat::Json | OutputFormat::Toon => return format_output(info, format),
    };

    Ok(FormattedOutput { data, format })
}

/// Format serializable data to the specified machine-readable format
///
/// `OutputFormat::Text` has no generic rendering and falls back to JSON.
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails
/// - TOON encoding fails, or the crate was built without the `toon` feature
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let format = match format {
        OutputFormat::Text => OutputFormat::Json,
        other => other,
    };

    let data = match format {
        OutputFormat::Toon => encode_toon(data)?,
        OutputFormat::Text | OutputFormat::Json => {
            serde_json::to_string(data).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
    };

    Ok(FormattedOutput { data, format })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON support is not enabled (build with --features toon)".to_owned(),
        format: OutputFormat::Toon,
    })
}

// ABOUTME: Command-line entry point printing one training summary per sensor package
// ABOUTME: Processes the reference packages or a single package given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summaries for the reference swim, run, and walk
//! training-stats
//!
//! # A single run: 15000 steps, 1 hour, 75 kg
//! training-stats --type RUN --data 15000 1 75
//!
//! # A walk rendered as JSON
//! training-stats --type WLK --data 9000 1 75 180 --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use training_stats::config::{LogLevel, TrainingConfig};
use training_stats::formatters::{format_summary, OutputFormat};
use training_stats::intelligence::Training;
use training_stats::packages::{default_packages, SensorPackage};

#[derive(Parser)]
#[command(
    name = "training-stats",
    version,
    about = "Workout distance, speed, and calorie calculator",
    long_about = "Computes distance, mean speed, and calories for running (RUN), sports walking (WLK), \
                  and swimming (SWM) from raw sensor readings. Without --type, the reference \
                  packages are processed."
)]
struct Cli {
    /// Workout type code (SWM, RUN, WLK)
    #[arg(long = "type", short = 't', requires = "data")]
    workout_type: Option<String>,

    /// Sensor fields in order: action, duration (h), weight (kg), then height (cm) for WLK or
    /// pool length (m) and pool count for SWM
    #[arg(long, short = 'd', num_args = 1.., requires = "workout_type")]
    data: Vec<f64>,

    /// Output format: text, json, or toon (overrides TRAINING_OUTPUT_FORMAT)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrainingConfig::from_env()?;
    if cli.verbose {
        config.logging.override_level(LogLevel::Debug);
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    config.logging.init()?;

    let packages = match cli.workout_type {
        Some(code) => vec![SensorPackage::new(code, cli.data)],
        None => default_packages(),
    };
    info!(
        packages = packages.len(),
        output.format = %config.output_format,
        "Processing sensor packages"
    );

    for package in &packages {
        let info = package.read()?.show_training_info()?;
        let output = format_summary(&info, config.output_format)?;
        println!("{}", output.data);
    }

    Ok(())
}

// ABOUTME: weightplan-cli - developer tool for the weight plan projection engine
// ABOUTME: Prints forecasts, targets, mode comparisons, plan status and plan checks as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly forecast for a medium plan
//! weightplan-cli forecast --gender male --age 30 --height 180 --current 90 --target 80
//!
//! # All three modes side by side
//! weightplan-cli compare-modes --gender female --age 35 --height 168 --current 78 --target 70
//!
//! # Check an active plan against today's weight
//! weightplan-cli check --gender male --age 30 --height 180 \
//!     --start-date 2025-01-06 --start-weight 90 --target 80 --latest 88.4
//!
//! # Tuned configuration from a JSON document
//! weightplan-cli --config tuning.json plan-targets --gender male --age 30 --height 180 \
//!     --current 90 --target 80 --mode hard
//! ```

mod args;
mod commands;

use args::{parse_mode, GoalArgs, PlanArgs, ProfileArgs};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use weightplan::logging::LoggingConfig;
use weightplan::models::{Direction, Mode};
use weightplan::WeightPlanner;

#[derive(Parser)]
#[command(
    name = "weightplan-cli",
    about = "Weight plan projection CLI",
    long_about = "Forecast weight trajectories, compute calorie and macro targets and check plan progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration document (full or partial); defaults plus WEIGHTPLAN_* env otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Weekly weight forecast
    Forecast {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        goal: GoalArgs,
        /// Plan mode: light, medium or hard (unknown values mean medium)
        #[arg(long, default_value = "medium", value_parser = parse_mode)]
        mode: Mode,
        /// Date of week 0 (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        anchor: Option<NaiveDate>,
    },

    /// Calorie and macro targets for a plan mode
    PlanTargets {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        goal: GoalArgs,
        /// Plan mode: light, medium or hard (unknown values mean medium)
        #[arg(long, default_value = "medium", value_parser = parse_mode)]
        mode: Mode,
    },

    /// Onboarding daily targets for a goal
    DailyTargets {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Current weight in kg
        #[arg(long)]
        weight: f64,
        /// Goal: lose, maintain or gain
        #[arg(long)]
        goal: Direction,
    },

    /// Forecast and targets for every mode
    CompareModes {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        goal: GoalArgs,
        /// Date of week 0 (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        anchor: Option<NaiveDate>,
    },

    /// Status of an active plan
    Status {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Goal detection and escalation for an active plan
    Check {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Check every plan in a JSON array of {plan, profile, latest_weight_kg}
    CheckBatch {
        /// Path to the JSON file
        file: PathBuf,
        /// Check date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the effective configuration
    Config,
}

fn build_planner(config: Option<&PathBuf>) -> anyhow::Result<WeightPlanner> {
    let planner = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            WeightPlanner::from_json(&fs::read_to_string(path)?)?
        }
        None => WeightPlanner::from_env()?,
    };
    Ok(planner)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let planner = build_planner(cli.config.as_ref())?;

    match cli.command {
        Command::Forecast {
            profile,
            goal,
            mode,
            anchor,
        } => commands::forecast(&planner, &profile, &goal, mode, anchor)?,
        Command::PlanTargets {
            profile,
            goal,
            mode,
        } => commands::plan_targets(&planner, &profile, &goal, mode)?,
        Command::DailyTargets {
            profile,
            weight,
            goal,
        } => commands::daily_targets(&planner, &profile, weight, goal)?,
        Command::CompareModes {
            profile,
            goal,
            anchor,
        } => commands::compare_modes(&planner, &profile, &goal, anchor)?,
        Command::Status { profile, plan } => commands::status(&planner, &profile, &plan)?,
        Command::Check { profile, plan } => commands::check(&planner, &profile, &plan)?,
        Command::CheckBatch { file, today } => commands::check_batch(&planner, &file, today)?,
        Command::Config => commands::show_config(&planner)?,
    }

    Ok(())
}

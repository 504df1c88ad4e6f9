// ABOUTME: Shared clap argument groups for weightplan-cli subcommands
// ABOUTME: Profile, goal and active plan arguments with conversion into core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use clap::Args;
use std::convert::Infallible;
use weightplan::errors::AppResult;
use weightplan::models::{ActivityLevel, Gender, Mode, Plan, Profile};
use weightplan::validation::{validate_profile, validate_weight};

/// Body profile
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Gender: male or female
    #[arg(long)]
    pub gender: Gender,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Height in centimeters
    #[arg(long = "height")]
    pub height_cm: f64,

    /// Activity level: low, light, moderate, high or very_high (unknown values mean moderate)
    #[arg(long, default_value = "moderate")]
    pub activity: String,
}

impl ProfileArgs {
    /// Validated profile
    pub fn to_profile(&self) -> AppResult<Profile> {
        let profile = Profile::new(
            self.gender,
            self.age,
            self.height_cm,
            ActivityLevel::from_str_lossy(&self.activity),
        );
        validate_profile(&profile)?;
        Ok(profile)
    }
}

/// Current and target weight
#[derive(Args, Debug)]
pub struct GoalArgs {
    /// Current weight in kg
    #[arg(long)]
    pub current: f64,

    /// Target weight in kg
    #[arg(long)]
    pub target: f64,
}

impl GoalArgs {
    /// Validate both weights
    pub fn validate(&self) -> AppResult<()> {
        validate_weight("current", self.current)?;
        validate_weight("target", self.target)
    }
}

/// An active plan and the latest measurement
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Plan mode: light, medium or hard (unknown values mean medium)
    #[arg(long, default_value = "medium", value_parser = parse_mode)]
    pub mode: Mode,

    /// Plan start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: NaiveDate,

    /// Weight at plan start in kg
    #[arg(long)]
    pub start_weight: f64,

    /// Target weight in kg
    #[arg(long)]
    pub target: f64,

    /// Latest measured weight in kg
    #[arg(long)]
    pub latest: f64,

    /// Check date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl PlanArgs {
    /// Validated plan
    pub fn to_plan(&self) -> AppResult<Plan> {
        validate_weight("start_weight", self.start_weight)?;
        validate_weight("target", self.target)?;
        validate_weight("latest", self.latest)?;
        Ok(Plan::new(
            self.mode,
            self.start_date,
            self.start_weight,
            self.target,
        ))
    }

    /// Check date
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(today)
    }
}

/// Mode parser for `--mode`; unknown names fall back to medium like `--activity` does
pub fn parse_mode(value: &str) -> Result<Mode, Infallible> {
    Ok(Mode::from_str_lossy(value))
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

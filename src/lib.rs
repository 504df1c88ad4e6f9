// ABOUTME: Main library entry point for the weight plan projection engine
// ABOUTME: Re-exports the core models and algorithms behind a configured planner facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Plan
//!
//! Forecasts how body weight will move under a calorie plan, prescribes the
//! daily calorie and macro targets for that plan, and checks real measurements
//! against the forecast, escalating the plan's intensity when progress lags.
//!
//! ## Architecture
//!
//! - **`weightplan-core`**: errors, models, constants and input validation
//! - **`weightplan-intelligence`**: configuration and the pure calculators
//! - **planner**: [`WeightPlanner`], one configuration plus every operation
//! - **logging**: `tracing-subscriber` setup for binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use weightplan::models::{ActivityLevel, Gender, Mode, Profile};
//! use weightplan::WeightPlanner;
//!
//! let planner = WeightPlanner::default();
//! let profile = Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate);
//! let anchor = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
//!
//! let forecast = planner.forecast(90.0, 80.0, &profile, Mode::Medium, anchor);
//! let targets = planner.plan_targets(90.0, 80.0, &profile, Mode::Medium);
//! assert!(forecast.len() > 1);
//! assert!(targets.daily_calories >= 1500.0);
//! ```

/// Structured logging setup
pub mod logging;

/// Configured facade over every operation
pub mod planner;

pub use planner::WeightPlanner;
pub use weightplan_core::{constants, errors, math, models, validation};
pub use weightplan_intelligence::{
    config, ConfigError, EnergyBalance, ModeScenario, PlanCheckInput, WeightPlanConfig,
};

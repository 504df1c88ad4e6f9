// ABOUTME: Weight plan projection engine: metabolic model, forecast, targets and progress
// ABOUTME: Pure synchronous calculators over core models, configured by WeightPlanConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Plan Intelligence
//!
//! Every calculator is a pure function of its inputs and a [`WeightPlanConfig`].
//! No function reads the clock: forecast anchor dates and "today" are always
//! passed in, so identical inputs produce identical outputs.
//!
//! ## Modules
//!
//! - **config**: Tunable model parameters with env and JSON overrides
//! - **metabolic**: BMR and TDEE
//! - **daily_targets**: Onboarding calorie and macro targets
//! - **energy_balance**: Effective daily balance shared by forecast and plan targets
//! - **forecast**: Weekly weight trajectory simulator
//! - **plan_targets**: Targets for a chosen plan mode
//! - **trajectory**: Expected weight for any date
//! - **progress**: Expected versus actual comparison
//! - **escalation**: Goal detection and mode escalation, single and batch
//! - **status**: Plan status summary
//! - **intake**: Intake versus targets summary
//! - **scenarios**: All modes side by side

/// Model configuration
pub mod config;

/// Mifflin-St Jeor BMR and TDEE
pub mod metabolic;

/// Onboarding daily targets
pub mod daily_targets;

/// Shared energy balance model
pub mod energy_balance;

/// Weekly weight forecast simulator
pub mod forecast;

/// Plan mode targets
pub mod plan_targets;

/// Expected weight lookup
pub mod trajectory;

/// Progress comparison
pub mod progress;

/// Plan escalation
pub mod escalation;

/// Plan status
pub mod status;

/// Intake summary
pub mod intake;

/// Mode comparison
pub mod scenarios;

pub use config::{ConfigError, WeightPlanConfig};
pub use daily_targets::calculate_daily_targets;
pub use energy_balance::{energy_balance, EnergyBalance};
pub use escalation::{check_plan, check_plans, PlanCheckInput};
pub use forecast::build_forecast;
pub use intake::summarize_intake;
pub use metabolic::{calculate_mifflin_st_jeor, calculate_tdee, profile_bmr, profile_tdee};
pub use plan_targets::calculate_plan_targets;
pub use progress::compare_progress;
pub use scenarios::{compare_modes, ModeScenario};
pub use status::plan_status;
pub use trajectory::{expected_weight_for_date, expected_weight_from_forecast};

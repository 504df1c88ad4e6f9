// ABOUTME: Domain models for profiles, plans, forecasts, targets and progress
// ABOUTME: Re-exports the model types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weekly forecast points
pub mod forecast;
/// Plan, mode and direction
pub mod plan;
/// Profile, gender and activity level
pub mod profile;
/// Verdicts, plan status and escalation outcomes
pub mod progress;
/// Calorie and macro targets
pub mod targets;

pub use forecast::{ForecastPoint, WeightForecast};
pub use plan::{Direction, Mode, Plan};
pub use profile::{ActivityLevel, Gender, Profile};
pub use progress::{
    Escalation, EscalationOutcome, PlanCheck, PlanStatus, ProgressVerdict, Recommendation,
};
pub use targets::{DailyTargets, IntakeSummary, MacroIntake, NutrientProgress, PlanTargets};

// ABOUTME: Subcommand handlers for weightplan-cli
// ABOUTME: Each handler validates its inputs, calls the planner and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::args::{today, GoalArgs, PlanArgs, ProfileArgs};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;
use weightplan::errors::{AppError, AppResult};
use weightplan::models::{Direction, Mode};
use weightplan::validation::{validate_profile, validate_weight};
use weightplan::{PlanCheckInput, WeightPlanner};

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

pub fn forecast(
    planner: &WeightPlanner,
    profile: &ProfileArgs,
    goal: &GoalArgs,
    mode: Mode,
    anchor: Option<NaiveDate>,
) -> AppResult<()> {
    let profile = profile.to_profile()?;
    goal.validate()?;
    let forecast = planner.forecast(
        goal.current,
        goal.target,
        &profile,
        mode,
        anchor.unwrap_or_else(today),
    );
    info!(points = forecast.len(), "forecast computed");
    print_json(&forecast)
}

pub fn plan_targets(
    planner: &WeightPlanner,
    profile: &ProfileArgs,
    goal: &GoalArgs,
    mode: Mode,
) -> AppResult<()> {
    let profile = profile.to_profile()?;
    goal.validate()?;
    print_json(&planner.plan_targets(goal.current, goal.target, &profile, mode))
}

pub fn daily_targets(
    planner: &WeightPlanner,
    profile: &ProfileArgs,
    weight: f64,
    goal: Direction,
) -> AppResult<()> {
    let profile = profile.to_profile()?;
    validate_weight("weight", weight)?;
    print_json(&planner.daily_targets(&profile, weight, goal))
}

pub fn compare_modes(
    planner: &WeightPlanner,
    profile: &ProfileArgs,
    goal: &GoalArgs,
    anchor: Option<NaiveDate>,
) -> AppResult<()> {
    let profile = profile.to_profile()?;
    goal.validate()?;
    print_json(&planner.compare_modes(
        goal.current,
        goal.target,
        &profile,
        anchor.unwrap_or_else(today),
    ))
}

pub fn status(planner: &WeightPlanner, profile: &ProfileArgs, plan: &PlanArgs) -> AppResult<()> {
    let profile_model = profile.to_profile()?;
    let plan_model = plan.to_plan()?;
    print_json(&planner.plan_status(&plan_model, &profile_model, plan.latest, plan.today()))
}

pub fn check(planner: &WeightPlanner, profile: &ProfileArgs, plan: &PlanArgs) -> AppResult<()> {
    let profile_model = profile.to_profile()?;
    let plan_model = plan.to_plan()?;
    print_json(&planner.check_plan(&plan_model, &profile_model, plan.latest, plan.today()))
}

pub fn check_batch(
    planner: &WeightPlanner,
    file: &Path,
    today_override: Option<NaiveDate>,
) -> AppResult<()> {
    let raw = fs::read_to_string(file).map_err(|e| {
        AppError::invalid_input(format!("cannot read {}: {e}", file.display())).with_source(e)
    })?;
    let inputs: Vec<PlanCheckInput> = serde_json::from_str(&raw)?;
    for (index, input) in inputs.iter().enumerate() {
        validate_check_input(input).map_err(|e| {
            let message = format!("plan #{index}: {}", e.message);
            AppError { message, ..e }
        })?;
    }
    info!(plans = inputs.len(), "checking plans");
    print_json(&planner.check_plans(&inputs, today_override.unwrap_or_else(today)))
}

/// Same bounds the single-plan handlers enforce through their argument groups
fn validate_check_input(input: &PlanCheckInput) -> AppResult<()> {
    validate_profile(&input.profile)?;
    validate_weight("start_weight_kg", input.plan.start_weight_kg)?;
    validate_weight("target_weight_kg", input.plan.target_weight_kg)?;
    validate_weight("latest_weight_kg", input.latest_weight_kg)
}

pub fn show_config(planner: &WeightPlanner) -> AppResult<()> {
    print_json(planner.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightplan::errors::ErrorCode;
    use weightplan::models::{ActivityLevel, Gender, Plan, Profile};

    fn input(age: u32, latest_weight_kg: f64) -> PlanCheckInput {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        PlanCheckInput {
            plan: Plan::new(Mode::Medium, start, 90.0, 80.0),
            profile: Profile::new(Gender::Male, age, 180.0, ActivityLevel::Moderate),
            latest_weight_kg,
        }
    }

    #[test]
    fn test_valid_batch_entry_passes() {
        assert!(validate_check_input(&input(30, 88.0)).is_ok());
    }

    #[test]
    fn test_batch_entry_with_bad_profile_rejected() {
        let error = validate_check_input(&input(7, 88.0)).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_batch_entry_with_bad_weight_rejected() {
        let error = validate_check_input(&input(30, -5.0)).unwrap_err();
        assert_eq!(error.context.field.as_deref(), Some("latest_weight_kg"));
    }
}

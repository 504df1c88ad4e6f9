// ABOUTME: Facade bundling a validated model configuration with every weight plan operation
// ABOUTME: Single entry point for collaborators such as schedulers, handlers and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use tracing::{debug, warn};
use weightplan_core::errors::AppResult;
use weightplan_core::models::{
    DailyTargets, Direction, IntakeSummary, MacroIntake, Mode, Plan, PlanCheck, PlanStatus,
    PlanTargets, Profile, ProgressVerdict, WeightForecast,
};
use weightplan_intelligence::{
    build_forecast, calculate_daily_targets, calculate_plan_targets, check_plan, check_plans,
    compare_modes, compare_progress, expected_weight_for_date, plan_status, summarize_intake,
    ModeScenario, PlanCheckInput, WeightPlanConfig,
};

/// Weight plan engine bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct WeightPlanner {
    config: WeightPlanConfig,
}

impl WeightPlanner {
    /// Create a planner from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the configuration fails validation
    pub fn new(config: WeightPlanConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a planner from defaults plus `WEIGHTPLAN_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if an override does not parse or validate
    pub fn from_env() -> AppResult<Self> {
        let config = WeightPlanConfig::load().inspect_err(|e| {
            warn!("Failed to load weight plan config from environment: {e}");
        })?;
        debug!(max_weeks = config.forecast.max_weeks, "weight planner configured");
        Ok(Self { config })
    }

    /// Create a planner from a full or partial JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the document is malformed or fails validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(Self {
            config: WeightPlanConfig::from_json(json)?,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WeightPlanConfig {
        &self.config
    }

    /// Weekly weight trajectory with week 0 on `anchor`
    #[must_use]
    pub fn forecast(
        &self,
        current_kg: f64,
        target_kg: f64,
        profile: &Profile,
        mode: Mode,
        anchor: NaiveDate,
    ) -> WeightForecast {
        build_forecast(current_kg, target_kg, profile, mode, anchor, &self.config)
    }

    /// Targets prescribed for a plan mode
    #[must_use]
    pub fn plan_targets(
        &self,
        current_kg: f64,
        target_kg: f64,
        profile: &Profile,
        mode: Mode,
    ) -> PlanTargets {
        calculate_plan_targets(current_kg, target_kg, profile, mode, &self.config)
    }

    /// Onboarding targets at the current weight
    #[must_use]
    pub fn daily_targets(&self, profile: &Profile, weight_kg: f64, goal: Direction) -> DailyTargets {
        calculate_daily_targets(profile, weight_kg, goal, &self.config)
    }

    /// Expected weight of an active plan on `check_date`
    #[must_use]
    pub fn expected_weight_for_date(
        &self,
        plan: &Plan,
        profile: &Profile,
        check_date: NaiveDate,
    ) -> f64 {
        expected_weight_for_date(plan, profile, check_date, &self.config)
    }

    /// Compare an actual weight with the expected one
    #[must_use]
    pub fn compare_progress(
        &self,
        expected_kg: f64,
        actual_kg: f64,
        target_kg: f64,
        plan_start_kg: f64,
    ) -> ProgressVerdict {
        compare_progress(expected_kg, actual_kg, target_kg, plan_start_kg, &self.config)
    }

    /// Forecast and targets for each mode
    #[must_use]
    pub fn compare_modes(
        &self,
        current_kg: f64,
        target_kg: f64,
        profile: &Profile,
        anchor: NaiveDate,
    ) -> Vec<ModeScenario> {
        compare_modes(current_kg, target_kg, profile, anchor, &self.config)
    }

    /// Status of an active plan on `today`
    #[must_use]
    pub fn plan_status(
        &self,
        plan: &Plan,
        profile: &Profile,
        latest_weight_kg: f64,
        today: NaiveDate,
    ) -> PlanStatus {
        plan_status(plan, profile, latest_weight_kg, today, &self.config)
    }

    /// Intake against targets
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn summarize_intake(&self, consumed: &MacroIntake, targets: &DailyTargets) -> IntakeSummary {
        summarize_intake(consumed, targets)
    }

    /// Goal detection and escalation for one plan
    #[must_use]
    pub fn check_plan(
        &self,
        plan: &Plan,
        profile: &Profile,
        latest_weight_kg: f64,
        today: NaiveDate,
    ) -> PlanCheck {
        check_plan(plan, profile, latest_weight_kg, today, &self.config)
    }

    /// Goal detection and escalation for many plans, in input order
    #[must_use]
    pub fn check_plans(&self, inputs: &[PlanCheckInput], today: NaiveDate) -> Vec<PlanCheck> {
        check_plans(inputs, today, &self.config)
    }
}

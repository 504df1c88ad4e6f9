// ABOUTME: Periodic plan check that detects goal completion and escalates lagging plans
// ABOUTME: Steps the mode light to medium to hard and recomputes targets from the latest weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Escalator
//!
//! A check never persists anything: when the mode moves, the caller receives
//! the updated plan and the fresh targets and decides what to store. The
//! plan's start date and start weight are kept, so the new mode's forecast is
//! still anchored at the original start.

use crate::config::WeightPlanConfig;
use crate::forecast::build_forecast;
use crate::plan_targets::calculate_plan_targets;
use crate::progress::compare_progress;
use crate::trajectory::expected_weight_from_forecast;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use weightplan_core::models::{Escalation, EscalationOutcome, Plan, PlanCheck, Profile};

/// One plan to check in a batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanCheckInput {
    /// The active plan
    pub plan: Plan,
    /// Owner's profile
    pub profile: Profile,
    /// Latest measured weight
    pub latest_weight_kg: f64,
}

/// Check one plan against the latest measurement on `today`.
///
/// Goal completion wins over escalation. A plan escalates only when it is off
/// track and the reported deviation exceeds the escalation threshold; a plan
/// already on hard stays on hard but still gets recomputed targets.
#[must_use]
pub fn check_plan(
    plan: &Plan,
    profile: &Profile,
    latest_weight_kg: f64,
    today: NaiveDate,
    config: &WeightPlanConfig,
) -> PlanCheck {
    let forecast = build_forecast(
        plan.start_weight_kg,
        plan.target_weight_kg,
        profile,
        plan.mode,
        plan.start_date,
        config,
    );
    let expected_kg = expected_weight_from_forecast(&forecast, plan.start_date, today)
        .unwrap_or(plan.start_weight_kg);
    let verdict = compare_progress(
        expected_kg,
        latest_weight_kg,
        plan.target_weight_kg,
        plan.start_weight_kg,
        config,
    );

    let direction = plan.direction(config.forecast.direction_tolerance_kg);
    let outcome = if direction.target_reached(latest_weight_kg, plan.target_weight_kg) {
        info!(
            direction = direction.as_str(),
            actual_kg = latest_weight_kg,
            target_kg = plan.target_weight_kg,
            "weight goal reached"
        );
        EscalationOutcome::GoalReached
    } else if !verdict.on_track && verdict.deviation_kg > config.progress.escalation_threshold_kg {
        let new_mode = plan.mode.next_harder();
        let targets = calculate_plan_targets(
            latest_weight_kg,
            plan.target_weight_kg,
            profile,
            new_mode,
            config,
        );
        info!(
            previous_mode = plan.mode.as_str(),
            new_mode = new_mode.as_str(),
            deviation_kg = verdict.deviation_kg,
            daily_calories = targets.daily_calories,
            "plan escalated"
        );
        EscalationOutcome::Escalated(Escalation {
            previous_mode: plan.mode,
            new_mode,
            targets,
            updated_plan: plan.with_mode(new_mode),
        })
    } else {
        debug!(
            on_track = verdict.on_track,
            deviation_kg = verdict.deviation_kg,
            "plan unchanged"
        );
        EscalationOutcome::NoChange
    };

    PlanCheck {
        expected_kg,
        actual_kg: latest_weight_kg,
        verdict,
        outcome,
    }
}

/// Check many independent plans on `today` in parallel, preserving input order
#[must_use]
pub fn check_plans(
    inputs: &[PlanCheckInput],
    today: NaiveDate,
    config: &WeightPlanConfig,
) -> Vec<PlanCheck> {
    inputs
        .par_iter()
        .map(|input| {
            check_plan(
                &input.plan,
                &input.profile,
                input.latest_weight_kg,
                today,
                config,
            )
        })
        .collect()
}

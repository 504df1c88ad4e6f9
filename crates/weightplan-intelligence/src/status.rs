// ABOUTME: Summary of an active plan against the latest measurement
// ABOUTME: Expected weight today, verdict, elapsed and remaining days and distance covered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use crate::forecast::build_forecast;
use crate::progress::compare_progress;
use crate::trajectory::{days_elapsed, expected_weight_from_forecast};
use chrono::NaiveDate;
use weightplan_core::constants::energy::DAYS_PER_WEEK;
use weightplan_core::constants::precision::{PERCENT_DECIMALS, WEIGHT_DECIMALS};
use weightplan_core::math::round_to;
use weightplan_core::models::{Plan, PlanStatus, Profile};

/// Status of `plan` on `today` given the latest measured weight.
///
/// Remaining days come from the forecast length, not the closed-form
/// estimate in the plan targets.
#[must_use]
pub fn plan_status(
    plan: &Plan,
    profile: &Profile,
    latest_weight_kg: f64,
    today: NaiveDate,
    config: &WeightPlanConfig,
) -> PlanStatus {
    let forecast = build_forecast(
        plan.start_weight_kg,
        plan.target_weight_kg,
        profile,
        plan.mode,
        plan.start_date,
        config,
    );
    let expected = expected_weight_from_forecast(&forecast, plan.start_date, today)
        .unwrap_or(plan.start_weight_kg);
    let verdict = compare_progress(
        expected,
        latest_weight_kg,
        plan.target_weight_kg,
        plan.start_weight_kg,
        config,
    );

    let elapsed = days_elapsed(plan.start_date, today);
    let forecast_days = u32::try_from(forecast.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(DAYS_PER_WEEK);

    let total_distance = plan.distance_kg();
    let progress_pct = if total_distance <= 0.0 {
        100.0
    } else {
        ((plan.start_weight_kg - latest_weight_kg).abs() / total_distance * 100.0).min(100.0)
    };

    PlanStatus {
        target_weight_kg: plan.target_weight_kg,
        mode: plan.mode,
        expected_today: round_to(expected, WEIGHT_DECIMALS),
        actual_latest: round_to(latest_weight_kg, WEIGHT_DECIMALS),
        verdict,
        days_elapsed: elapsed,
        days_remaining: forecast_days.saturating_sub(elapsed),
        progress_pct: round_to(progress_pct, PERCENT_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use weightplan_core::models::{ActivityLevel, Gender, Mode};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn male() -> Profile {
        Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate)
    }

    #[test]
    fn test_status_mid_plan() {
        let plan = Plan::new(Mode::Medium, start(), 90.0, 80.0);
        let today = start().checked_add_days(Days::new(14)).unwrap();
        let status = plan_status(&plan, &male(), 89.0, today, &WeightPlanConfig::default());

        assert_eq!(status.days_elapsed, 14);
        assert!((status.progress_pct - 10.0).abs() < 1e-9);
        assert!(status.expected_today < 90.0);
        assert!(status.days_remaining > 0);
        assert_eq!(status.mode, Mode::Medium);
    }

    #[test]
    fn test_progress_capped_at_hundred() {
        let plan = Plan::new(Mode::Medium, start(), 90.0, 80.0);
        let status = plan_status(&plan, &male(), 78.0, start(), &WeightPlanConfig::default());
        assert!((status.progress_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_distance_is_complete() {
        let plan = Plan::new(Mode::Light, start(), 80.0, 80.0);
        let today = start().checked_add_days(Days::new(30)).unwrap();
        let status = plan_status(&plan, &male(), 80.4, today, &WeightPlanConfig::default());
        assert!((status.progress_pct - 100.0).abs() < f64::EPSILON);
        // single point forecast covers 7 days
        assert_eq!(status.days_remaining, 0);
    }

    #[test]
    fn test_before_start_clamps_elapsed() {
        let plan = Plan::new(Mode::Light, start(), 80.0, 80.0);
        let today = start().checked_sub_days(Days::new(3)).unwrap();
        let status = plan_status(&plan, &male(), 80.0, today, &WeightPlanConfig::default());
        assert_eq!(status.days_elapsed, 0);
        assert_eq!(status.days_remaining, 7);
    }
}

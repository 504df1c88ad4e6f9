// ABOUTME: Expected weight lookup for an arbitrary date along a forecast
// ABOUTME: Exact weekly points, linear interpolation in between, final weight past the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use crate::forecast::build_forecast;
use chrono::NaiveDate;
use weightplan_core::constants::energy::DAYS_PER_WEEK;
use weightplan_core::constants::precision::WEIGHT_DECIMALS;
use weightplan_core::math::round_to;
use weightplan_core::models::{Plan, Profile, WeightForecast};

/// Whole days from `start` to `check_date`, never negative
#[must_use]
pub fn days_elapsed(start: NaiveDate, check_date: NaiveDate) -> u32 {
    u32::try_from((check_date - start).num_days().max(0)).unwrap_or(u32::MAX)
}

/// Expected weight on `check_date` for a forecast anchored at `start`.
///
/// Dates before the anchor map to week 0 and dates past the last point map
/// to the final weight. Between two weekly points the weight is interpolated
/// linearly and rounded to 2 decimals. Returns `None` for an empty forecast.
#[must_use]
pub fn expected_weight_from_forecast(
    forecast: &WeightForecast,
    start: NaiveDate,
    check_date: NaiveDate,
) -> Option<f64> {
    let last = forecast.last()?;
    let days = days_elapsed(start, check_date);
    let week_index = (days / DAYS_PER_WEEK) as usize;
    let day_in_week = days % DAYS_PER_WEEK;

    if week_index >= forecast.len() {
        return Some(last.weight_kg);
    }

    let left = forecast.get(week_index)?;
    if day_in_week == 0 || week_index == forecast.len() - 1 {
        return Some(left.weight_kg);
    }

    let right = forecast.get(week_index + 1)?;
    let ratio = f64::from(day_in_week) / f64::from(DAYS_PER_WEEK);
    let interpolated = (right.weight_kg - left.weight_kg).mul_add(ratio, left.weight_kg);
    Some(round_to(interpolated, WEIGHT_DECIMALS))
}

/// Expected weight on `check_date` for an active plan.
///
/// Rebuilds the plan's forecast anchored at its start date, so the result is
/// fully determined by the plan, the profile and the date.
#[must_use]
pub fn expected_weight_for_date(
    plan: &Plan,
    profile: &Profile,
    check_date: NaiveDate,
    config: &WeightPlanConfig,
) -> f64 {
    let forecast = build_forecast(
        plan.start_weight_kg,
        plan.target_weight_kg,
        profile,
        plan.mode,
        plan.start_date,
        config,
    );
    expected_weight_from_forecast(&forecast, plan.start_date, check_date)
        .unwrap_or(plan.start_weight_kg)
}

// ABOUTME: Weekly weight trajectory simulator for a weight plan
// ABOUTME: Iterates the energy balance week by week until the target or the week cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forecast Simulator
//!
//! Each simulated week recomputes BMR at the current simulated weight, so the
//! trajectory flattens as the body gets lighter (or heavier) even before
//! adaptive thermogenesis starts. The simulation is a pure function of its
//! inputs; week 0 sits on the caller-supplied anchor date.

use crate::config::WeightPlanConfig;
use crate::energy_balance::energy_balance;
use chrono::{Days, NaiveDate};
use tracing::debug;
use weightplan_core::constants::energy::DAYS_PER_WEEK;
use weightplan_core::constants::precision::WEIGHT_DECIMALS;
use weightplan_core::math::round_to;
use weightplan_core::models::{Direction, ForecastPoint, Mode, Profile, WeightForecast};

/// Clamp a weekly change so the trajectory never moves away from the target
fn directional_change(direction: Direction, weekly_change_kg: f64) -> f64 {
    match direction {
        Direction::Lose => weekly_change_kg.min(0.0),
        Direction::Gain => weekly_change_kg.max(0.0),
        Direction::Maintain => 0.0,
    }
}

/// Clamp the next weight so it never passes the target
fn clamp_overshoot(direction: Direction, next_kg: f64, target_kg: f64) -> f64 {
    match direction {
        Direction::Lose => next_kg.max(target_kg),
        Direction::Gain => next_kg.min(target_kg),
        Direction::Maintain => next_kg,
    }
}

/// Simulate the weekly weight trajectory from `current_kg` toward `target_kg`.
///
/// Returns a single week-0 point when the direction is maintain or the start is
/// already within the convergence tolerance. Otherwise points are appended weekly
/// until the weight lands within tolerance (recorded at exactly the target) or
/// `forecast.max_weeks` is reached. Reported weights are rounded to 2 decimals;
/// the simulation itself carries full precision.
#[must_use]
pub fn build_forecast(
    current_kg: f64,
    target_kg: f64,
    profile: &Profile,
    mode: Mode,
    anchor: NaiveDate,
    config: &WeightPlanConfig,
) -> WeightForecast {
    let limits = &config.forecast;
    let direction = Direction::resolve(current_kg, target_kg, limits.direction_tolerance_kg);

    if direction == Direction::Maintain
        || (current_kg - target_kg).abs() <= limits.convergence_tolerance_kg
    {
        return WeightForecast::anchor_only(anchor, round_to(current_kg, WEIGHT_DECIMALS));
    }

    let days_per_week = f64::from(DAYS_PER_WEEK);
    let mut points = Vec::with_capacity(limits.max_weeks as usize + 1);
    points.push(ForecastPoint {
        week: 0,
        date: anchor,
        weight_kg: round_to(current_kg, WEIGHT_DECIMALS),
    });

    let mut weight = current_kg;
    let mut date = anchor;
    let mut converged = false;

    for week in 1..=limits.max_weeks {
        let balance = energy_balance(weight, profile, mode, week, direction, config);
        let change = directional_change(
            direction,
            balance.weekly_change_kg(days_per_week, config.energy.kcal_per_kg),
        );

        let mut next = clamp_overshoot(direction, weight + change, target_kg);
        converged = (next - target_kg).abs() <= limits.convergence_tolerance_kg;
        if converged {
            next = target_kg;
        }

        let Some(next_date) = date.checked_add_days(Days::new(u64::from(DAYS_PER_WEEK))) else {
            break;
        };
        weight = next;
        date = next_date;
        points.push(ForecastPoint {
            week,
            date,
            weight_kg: round_to(weight, WEIGHT_DECIMALS),
        });

        if converged {
            break;
        }
    }

    debug!(
        direction = direction.as_str(),
        mode = mode.as_str(),
        start_kg = current_kg,
        target_kg,
        weeks = points.len() - 1,
        converged,
        "weight forecast built"
    );

    WeightForecast::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightplan_core::models::{ActivityLevel, Gender};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn male() -> Profile {
        Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate)
    }

    #[test]
    fn test_loss_converges_to_target() {
        let forecast = build_forecast(
            90.0,
            80.0,
            &male(),
            Mode::Medium,
            anchor(),
            &WeightPlanConfig::default(),
        );
        let first = forecast.first().unwrap();
        let last = forecast.last().unwrap();
        assert_eq!(first.week, 0);
        assert_eq!(first.date, anchor());
        assert!((first.weight_kg - 90.0).abs() < f64::EPSILON);
        assert!(forecast.get(1).unwrap().weight_kg < 90.0);
        assert!((last.weight_kg - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dates_advance_weekly() {
        let forecast = build_forecast(
            70.0,
            72.0,
            &male(),
            Mode::Hard,
            anchor(),
            &WeightPlanConfig::default(),
        );
        for (index, point) in forecast.points().iter().enumerate() {
            assert_eq!(point.week as usize, index);
            assert_eq!((point.date - anchor()).num_days(), 7 * index as i64);
        }
    }

    #[test]
    fn test_maintain_short_circuit() {
        let forecast = build_forecast(
            75.0,
            75.005,
            &male(),
            Mode::Light,
            anchor(),
            &WeightPlanConfig::default(),
        );
        assert_eq!(forecast.len(), 1);
        assert!((forecast.last().unwrap().weight_kg - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_week_cap_bounds_length() {
        let mut config = WeightPlanConfig::default();
        config.forecast.max_weeks = 4;
        let forecast = build_forecast(120.0, 60.0, &male(), Mode::Light, anchor(), &config);
        assert_eq!(forecast.len(), 5);
        assert!(forecast.last().unwrap().weight_kg > 60.0);
    }

    #[test]
    fn test_floor_stall_stays_flat() {
        // TDEE sits below the female floor, so the deficit is entirely cancelled
        let profile = Profile::new(Gender::Female, 70, 150.0, ActivityLevel::Low);
        let mut config = WeightPlanConfig::default();
        config.forecast.max_weeks = 10;
        let forecast = build_forecast(50.0, 45.0, &profile, Mode::Hard, anchor(), &config);
        assert_eq!(forecast.len(), 11);
        assert!(forecast
            .points()
            .iter()
            .all(|p| (p.weight_kg - 50.0).abs() < f64::EPSILON));
    }
}

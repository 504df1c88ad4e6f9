// ABOUTME: Side-by-side forecasts and targets for every plan mode
// ABOUTME: Lets the user compare light, medium and hard before choosing one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use crate::forecast::build_forecast;
use crate::plan_targets::calculate_plan_targets;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use weightplan_core::models::{Mode, PlanTargets, Profile, WeightForecast};

/// Forecast and targets for one mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModeScenario {
    /// Mode simulated
    pub mode: Mode,
    /// Weekly trajectory
    pub forecast: WeightForecast,
    /// Prescribed targets
    pub targets: PlanTargets,
}

/// Scenarios for light, medium and hard, in that order
#[must_use]
pub fn compare_modes(
    current_kg: f64,
    target_kg: f64,
    profile: &Profile,
    anchor: NaiveDate,
    config: &WeightPlanConfig,
) -> Vec<ModeScenario> {
    Mode::ALL
        .iter()
        .map(|&mode| ModeScenario {
            mode,
            forecast: build_forecast(current_kg, target_kg, profile, mode, anchor, config),
            targets: calculate_plan_targets(current_kg, target_kg, profile, mode, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightplan_core::models::{ActivityLevel, Gender};

    #[test]
    fn test_harder_modes_finish_sooner() {
        let profile = Profile::new(Gender::Female, 35, 168.0, ActivityLevel::Light);
        let anchor = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let scenarios = compare_modes(78.0, 70.0, &profile, anchor, &WeightPlanConfig::default());

        let modes: Vec<Mode> = scenarios.iter().map(|s| s.mode).collect();
        assert_eq!(modes, vec![Mode::Light, Mode::Medium, Mode::Hard]);
        assert!(scenarios[0].forecast.len() >= scenarios[1].forecast.len());
        assert!(scenarios[1].forecast.len() >= scenarios[2].forecast.len());
        assert!(scenarios[0].targets.daily_calories >= scenarios[2].targets.daily_calories);
    }
}

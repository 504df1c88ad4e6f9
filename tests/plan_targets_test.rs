// ABOUTME: Integration tests for plan mode targets and onboarding daily targets
// ABOUTME: Reference values, floor handling, maintenance and intake summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{all_profiles, floor_bound_profile, init_test_logging, male_profile};
use weightplan::models::{Direction, MacroIntake, Mode};
use weightplan::{WeightPlanConfig, WeightPlanner};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

#[test]
fn test_medium_loss_reference_targets() {
    init_test_logging();
    let targets = WeightPlanner::default().plan_targets(90.0, 80.0, &male_profile(), Mode::Medium);

    // BMR 1880, TDEE 2914, minus the 500 kcal medium deficit
    assert!(close(targets.daily_calories, 2414.0));
    assert!(close(targets.daily_protein, 171.0));
    assert!(close(targets.daily_fat, 72.0));
    assert!(close(targets.daily_carbs, 270.5));
    assert!(close(targets.daily_deficit, 500.0));
    assert!(close(targets.weekly_loss_kg, 0.455));
    assert_eq!(targets.estimated_weeks, 22);
}

#[test]
fn test_medium_gain_reference_targets() {
    let targets = WeightPlanner::default().plan_targets(70.0, 75.0, &male_profile(), Mode::Medium);

    // BMR 1680, TDEE 2604, plus the 350 kcal medium surplus
    assert!(close(targets.daily_calories, 2954.0));
    assert!(close(targets.daily_protein, 126.0));
    assert!(close(targets.daily_fat, 56.0));
    assert!(close(targets.daily_carbs, 486.5));
    assert!(close(targets.daily_deficit, 350.0));
    assert!(close(targets.weekly_loss_kg, 0.318));
    assert_eq!(targets.estimated_weeks, 16);
}

#[test]
fn test_maintain_targets() {
    let targets = WeightPlanner::default().plan_targets(80.0, 80.0, &male_profile(), Mode::Hard);

    assert_eq!(targets.estimated_weeks, 0);
    assert!(close(targets.daily_deficit, 0.0));
    assert!(close(targets.weekly_loss_kg, 0.0));
    // TDEE at 80 kg, protein from the gain table at 1.8 g/kg
    assert!(close(targets.daily_calories, 2759.0));
    assert!(close(targets.daily_protein, 144.0));
}

#[test]
fn test_floor_cancelled_deficit_hits_week_cap() {
    let config = WeightPlanConfig::default();
    let targets =
        WeightPlanner::default().plan_targets(50.0, 45.0, &floor_bound_profile(), Mode::Hard);

    assert!(close(targets.daily_calories, config.energy.calorie_floor.female));
    assert!(close(targets.daily_deficit, 0.0));
    assert_eq!(targets.estimated_weeks, config.forecast.max_weeks);
}

#[test]
fn test_targets_stay_within_bounds() {
    let config = WeightPlanConfig::default();
    let planner = WeightPlanner::default();
    for profile in all_profiles() {
        let floor = config.energy.calorie_floor.for_gender(profile.gender);
        for mode in Mode::ALL {
            for (current, target) in [(110.0, 70.0), (60.0, 72.0), (75.0, 75.0)] {
                let targets = planner.plan_targets(current, target, &profile, mode);
                assert!(targets.daily_calories >= floor);
                assert!(targets.daily_carbs >= 0.0);
                assert!(targets.daily_deficit >= 0.0);
                assert!(targets.estimated_weeks <= config.forecast.max_weeks);
            }
        }
    }
}

#[test]
fn test_harder_mode_prescribes_fewer_calories_for_loss() {
    let planner = WeightPlanner::default();
    let calories: Vec<f64> = Mode::ALL
        .into_iter()
        .map(|mode| {
            planner
                .plan_targets(90.0, 80.0, &male_profile(), mode)
                .daily_calories
        })
        .collect();
    assert!(calories[0] > calories[1]);
    assert!(calories[1] > calories[2]);
}

#[test]
fn test_onboarding_loss_targets() {
    let targets = WeightPlanner::default().daily_targets(&male_profile(), 90.0, Direction::Lose);

    // TDEE 2914 minus 300, split 35/30/35
    assert!(close(targets.daily_calories_target, 2614.0));
    assert!(close(targets.daily_protein_target, 228.7));
    assert!(close(targets.daily_fat_target, 87.1));
    assert!(close(targets.daily_carbs_target, 228.7));
}

#[test]
fn test_onboarding_gain_exceeds_maintain_by_delta() {
    let planner = WeightPlanner::default();
    let gain = planner.daily_targets(&male_profile(), 90.0, Direction::Gain);
    let maintain = planner.daily_targets(&male_profile(), 90.0, Direction::Maintain);
    assert!(close(
        gain.daily_calories_target - maintain.daily_calories_target,
        300.0
    ));
}

#[test]
fn test_intake_against_plan_targets() {
    let planner = WeightPlanner::default();
    let targets = planner
        .plan_targets(90.0, 80.0, &male_profile(), Mode::Medium)
        .as_daily_targets();
    let consumed = MacroIntake {
        calories: 1207.0,
        protein_g: 171.0,
        fat_g: 80.0,
        carbs_g: 0.0,
    };

    let summary = planner.summarize_intake(&consumed, &targets);
    assert!(close(summary.calories.pct, 50.0));
    assert!(close(summary.calories.left, 1207.0));
    assert!(close(summary.protein.pct, 100.0));
    assert!(close(summary.protein.left, 0.0));
    assert!(close(summary.fat.left, -8.0));
    assert!(close(summary.carbs.pct, 0.0));
}

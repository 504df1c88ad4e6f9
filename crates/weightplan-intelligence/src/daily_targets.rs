// ABOUTME: Onboarding daily calorie and macronutrient targets
// ABOUTME: TDEE plus a goal delta, floored, split into protein, fat and carbohydrate grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use crate::metabolic::profile_tdee;
use weightplan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use weightplan_core::constants::precision::NUTRIENT_DECIMALS;
use weightplan_core::math::round_to;
use weightplan_core::models::{DailyTargets, Direction, Profile};

/// Daily targets at the current weight for a goal.
///
/// Used when a profile is created or edited, before any plan mode is chosen.
/// Macro grams derive from the unrounded calorie figure.
#[must_use]
pub fn calculate_daily_targets(
    profile: &Profile,
    weight_kg: f64,
    goal: Direction,
    config: &WeightPlanConfig,
) -> DailyTargets {
    let daily = &config.daily_targets;
    let tdee = profile_tdee(profile, weight_kg, &config.metabolic);
    let calories = (tdee + daily.delta_for(goal)).max(daily.min_calories);
    let split = daily.split_for(goal);

    DailyTargets {
        daily_calories_target: round_to(calories, NUTRIENT_DECIMALS),
        daily_protein_target: round_to(
            calories * split.protein / KCAL_PER_GRAM_PROTEIN,
            NUTRIENT_DECIMALS,
        ),
        daily_fat_target: round_to(calories * split.fat / KCAL_PER_GRAM_FAT, NUTRIENT_DECIMALS),
        daily_carbs_target: round_to(
            calories * split.carbs / KCAL_PER_GRAM_CARBS,
            NUTRIENT_DECIMALS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightplan_core::models::{ActivityLevel, Gender};

    #[test]
    fn test_lose_goal_applies_deficit_and_split() {
        let profile = Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate);
        let targets =
            calculate_daily_targets(&profile, 90.0, Direction::Lose, &WeightPlanConfig::default());

        assert!((targets.daily_calories_target - 2614.0).abs() < 1e-9);
        // 2614 * 0.35 / 4 = 228.725
        assert!((targets.daily_protein_target - 228.7).abs() < 1e-9);
        // 2614 * 0.30 / 9 = 87.133
        assert!((targets.daily_fat_target - 87.1).abs() < 1e-9);
        assert!((targets.daily_carbs_target - 228.7).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_calories_floor() {
        let profile = Profile::new(Gender::Female, 80, 150.0, ActivityLevel::Low);
        let targets =
            calculate_daily_targets(&profile, 40.0, Direction::Lose, &WeightPlanConfig::default());
        // BMR 400 + 937.5 - 400 - 161 = 776.5, TDEE 931.8
        assert!((targets.daily_calories_target - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_gain_uses_surplus() {
        let profile = Profile::new(Gender::Female, 25, 165.0, ActivityLevel::Light);
        let config = WeightPlanConfig::default();
        let maintain = calculate_daily_targets(&profile, 60.0, Direction::Maintain, &config);
        let gain = calculate_daily_targets(&profile, 60.0, Direction::Gain, &config);
        assert!((gain.daily_calories_target - maintain.daily_calories_target - 300.0).abs() < 0.11);
    }
}

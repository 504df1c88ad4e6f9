// ABOUTME: Calorie and macro targets prescribed for a chosen plan mode
// ABOUTME: Week-0 energy balance, protein and fat per kg, carbs as remainder, estimated duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use crate::energy_balance::energy_balance;
use tracing::debug;
use weightplan_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use weightplan_core::constants::precision::{NUTRIENT_DECIMALS, RATE_DECIMALS};
use weightplan_core::math::round_to;
use weightplan_core::models::{Direction, Mode, PlanTargets, Profile};

/// Daily balance magnitude that actually moves weight toward the target
fn directional_balance(direction: Direction, balance: f64) -> f64 {
    match direction {
        Direction::Lose => (-balance).max(0.0),
        Direction::Gain => balance.max(0.0),
        Direction::Maintain => 0.0,
    }
}

/// Plan targets for moving from `current_kg` to `target_kg` in `mode`.
///
/// `estimated_weeks` is a closed-form approximation from the week-0 rate: 0 for
/// maintenance, and the forecast week cap when the calorie floor cancels the
/// whole delta. The forecast length remains the authoritative duration.
#[must_use]
pub fn calculate_plan_targets(
    current_kg: f64,
    target_kg: f64,
    profile: &Profile,
    mode: Mode,
    config: &WeightPlanConfig,
) -> PlanTargets {
    let direction = Direction::resolve(
        current_kg,
        target_kg,
        config.forecast.direction_tolerance_kg,
    );
    let balance = energy_balance(current_kg, profile, mode, 0, direction, config);
    let calories = balance.target_calories;

    let macros = &config.plan_targets;
    let protein_g = (macros.protein_g_per_kg(direction, mode) * current_kg).max(0.0);
    let fat_g = (macros.fat_g_per_kg * current_kg).max(0.0);
    let carbs_g = ((calories - protein_g * KCAL_PER_GRAM_PROTEIN - fat_g * KCAL_PER_GRAM_FAT)
        / KCAL_PER_GRAM_CARBS)
        .max(0.0);

    let daily_deficit = directional_balance(direction, balance.balance);
    let weekly_rate = daily_deficit * f64::from(DAYS_PER_WEEK) / config.energy.kcal_per_kg;
    let max_weeks = config.forecast.max_weeks;
    let estimated_weeks = match direction {
        Direction::Maintain => 0,
        Direction::Lose | Direction::Gain if weekly_rate <= 0.0 => max_weeks,
        Direction::Lose | Direction::Gain => {
            let weeks = ((current_kg - target_kg).abs() / weekly_rate).ceil();
            (weeks as u32).min(max_weeks)
        }
    };

    debug!(
        direction = direction.as_str(),
        mode = mode.as_str(),
        calories,
        estimated_weeks,
        "plan targets calculated"
    );

    PlanTargets {
        daily_calories: round_to(calories, NUTRIENT_DECIMALS),
        daily_protein: round_to(protein_g, NUTRIENT_DECIMALS),
        daily_fat: round_to(fat_g, NUTRIENT_DECIMALS),
        daily_carbs: round_to(carbs_g, NUTRIENT_DECIMALS),
        estimated_weeks,
        weekly_loss_kg: round_to(weekly_rate, RATE_DECIMALS),
        daily_deficit: round_to(daily_deficit, NUTRIENT_DECIMALS),
    }
}

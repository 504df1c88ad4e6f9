// ABOUTME: Consumed calories and macros compared with the daily targets
// ABOUTME: Percent of target reached and amount left for each nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weightplan_core::constants::precision::{NUTRIENT_DECIMALS, PERCENT_DECIMALS};
use weightplan_core::math::round_to;
use weightplan_core::models::{DailyTargets, IntakeSummary, MacroIntake, NutrientProgress};

fn nutrient_progress(consumed: f64, target: f64) -> NutrientProgress {
    let pct = if target > 0.0 {
        round_to(consumed / target * 100.0, PERCENT_DECIMALS)
    } else {
        0.0
    };
    NutrientProgress {
        pct,
        left: round_to(target - consumed, NUTRIENT_DECIMALS),
    }
}

/// Summarize a day's intake against its targets; `left` goes negative when over target
#[must_use]
pub fn summarize_intake(consumed: &MacroIntake, targets: &DailyTargets) -> IntakeSummary {
    IntakeSummary {
        calories: nutrient_progress(consumed.calories, targets.daily_calories_target),
        protein: nutrient_progress(consumed.protein_g, targets.daily_protein_target),
        fat: nutrient_progress(consumed.fat_g, targets.daily_fat_target),
        carbs: nutrient_progress(consumed.carbs_g, targets.daily_carbs_target),
    }
}

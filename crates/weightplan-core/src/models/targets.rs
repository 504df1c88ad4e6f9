// ABOUTME: Calorie and macronutrient target bundles
// ABOUTME: DailyTargets for onboarding, PlanTargets for a selected mode, intake summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily targets computed once at onboarding or profile edit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTargets {
    /// Daily calories (kcal)
    pub daily_calories_target: f64,
    /// Daily protein (g)
    pub daily_protein_target: f64,
    /// Daily fat (g)
    pub daily_fat_target: f64,
    /// Daily carbohydrates (g)
    pub daily_carbs_target: f64,
}

/// Targets prescribed for a selected plan mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanTargets {
    /// Daily calories (kcal), never below the gender floor
    pub daily_calories: f64,
    /// Daily protein (g)
    pub daily_protein: f64,
    /// Daily fat (g)
    pub daily_fat: f64,
    /// Daily carbohydrates (g), never negative
    pub daily_carbs: f64,
    /// Closed-form duration estimate in weeks
    pub estimated_weeks: u32,
    /// Expected weekly weight change magnitude (kg)
    pub weekly_loss_kg: f64,
    /// Magnitude of the actual daily energy balance after the floor (kcal)
    pub daily_deficit: f64,
}

impl PlanTargets {
    /// The calorie/macro part as onboarding-shaped targets
    #[must_use]
    pub const fn as_daily_targets(&self) -> DailyTargets {
        DailyTargets {
            daily_calories_target: self.daily_calories,
            daily_protein_target: self.daily_protein,
            daily_fat_target: self.daily_fat,
            daily_carbs_target: self.daily_carbs,
        }
    }
}

/// Calories and macros consumed so far in a day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroIntake {
    /// Calories eaten (kcal)
    pub calories: f64,
    /// Protein eaten (g)
    pub protein_g: f64,
    /// Fat eaten (g)
    pub fat_g: f64,
    /// Carbohydrates eaten (g)
    pub carbs_g: f64,
}

/// Progress of one nutrient against its target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientProgress {
    /// Consumed as a percentage of target, 0 when no target is set
    pub pct: f64,
    /// Target minus consumed; negative once over target
    pub left: f64,
}

/// Consumed intake measured against daily targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntakeSummary {
    /// Calories
    pub calories: NutrientProgress,
    /// Protein
    pub protein: NutrientProgress,
    /// Fat
    pub fat: NutrientProgress,
    /// Carbohydrates
    pub carbs: NutrientProgress,
}

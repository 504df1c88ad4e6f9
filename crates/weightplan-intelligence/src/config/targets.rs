// ABOUTME: Calorie and macro target configuration
// ABOUTME: Onboarding goal deltas and macro splits, plan protein tables and fat allowance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use weightplan_core::models::{Direction, Mode};

/// Share of daily calories per macronutrient (each 0.0-1.0, summing to 1.0)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein: f64,
    /// Fat share
    pub fat: f64,
    /// Carbohydrate share
    pub carbs: f64,
}

impl MacroSplit {
    /// Create a new split
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Onboarding (profile-time) daily target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTargetsConfig {
    /// Calorie delta for a weight-loss goal (-300)
    pub lose_delta_kcal: f64,
    /// Calorie delta for maintenance (0)
    pub maintain_delta_kcal: f64,
    /// Calorie delta for a weight-gain goal (+300)
    pub gain_delta_kcal: f64,
    /// Macro split for weight loss (0.35 / 0.30 / 0.35)
    pub lose_split: MacroSplit,
    /// Macro split for maintenance (0.30 / 0.25 / 0.45)
    pub maintain_split: MacroSplit,
    /// Macro split for weight gain (0.30 / 0.20 / 0.50)
    pub gain_split: MacroSplit,
    /// Minimum daily calories regardless of gender (1200)
    pub min_calories: f64,
}

impl DailyTargetsConfig {
    /// Calorie delta for a goal
    #[must_use]
    pub const fn delta_for(&self, goal: Direction) -> f64 {
        match goal {
            Direction::Lose => self.lose_delta_kcal,
            Direction::Maintain => self.maintain_delta_kcal,
            Direction::Gain => self.gain_delta_kcal,
        }
    }

    /// Macro split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: Direction) -> MacroSplit {
        match goal {
            Direction::Lose => self.lose_split,
            Direction::Maintain => self.maintain_split,
            Direction::Gain => self.gain_split,
        }
    }
}

impl Default for DailyTargetsConfig {
    fn default() -> Self {
        Self {
            lose_delta_kcal: -300.0,
            maintain_delta_kcal: 0.0,
            gain_delta_kcal: 300.0,
            lose_split: MacroSplit::new(0.35, 0.30, 0.35),
            maintain_split: MacroSplit::new(0.30, 0.25, 0.45),
            gain_split: MacroSplit::new(0.30, 0.20, 0.50),
            min_calories: 1200.0,
        }
    }
}

/// Protein allowance per mode (g per kg of current body weight)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProteinPerKg {
    /// Light mode
    pub light: f64,
    /// Medium mode
    pub medium: f64,
    /// Hard mode
    pub hard: f64,
}

impl ProteinPerKg {
    /// Allowance for a mode
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Light => self.light,
            Mode::Medium => self.medium,
            Mode::Hard => self.hard,
        }
    }
}

/// Plan (mode-time) macro configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanTargetsConfig {
    /// Protein table for weight loss (1.6 / 1.9 / 2.2 g/kg)
    pub lose_protein_g_per_kg: ProteinPerKg,
    /// Protein table for weight gain and maintenance (1.6 / 1.8 / 2.0 g/kg)
    pub gain_protein_g_per_kg: ProteinPerKg,
    /// Fat allowance (0.8 g/kg)
    pub fat_g_per_kg: f64,
}

impl PlanTargetsConfig {
    /// Protein g/kg for a direction and mode; maintenance uses the gain table
    #[must_use]
    pub const fn protein_g_per_kg(&self, direction: Direction, mode: Mode) -> f64 {
        match direction {
            Direction::Lose => self.lose_protein_g_per_kg.for_mode(mode),
            Direction::Gain | Direction::Maintain => self.gain_protein_g_per_kg.for_mode(mode),
        }
    }
}

impl Default for PlanTargetsConfig {
    fn default() -> Self {
        Self {
            lose_protein_g_per_kg: ProteinPerKg {
                light: 1.6,
                medium: 1.9,
                hard: 2.2,
            },
            gain_protein_g_per_kg: ProteinPerKg {
                light: 1.6,
                medium: 1.8,
                hard: 2.0,
            },
            fat_g_per_kg: 0.8,
        }
    }
}

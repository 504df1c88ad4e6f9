// ABOUTME: Energy balance model configuration shared by the simulator and plan targets
// ABOUTME: Per-mode calorie deltas, gender calorie floors and adaptive thermogenesis ramp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Balance Configuration
//!
//! Every number that decides how many calories a plan prescribes, and how fast
//! weight moves as a result, lives here so the forecast and the prescribed
//! targets read from one place.

use serde::{Deserialize, Serialize};
use weightplan_core::constants::energy::KCAL_PER_KG_BODY_MASS;
use weightplan_core::models::{Direction, Gender, Mode};

/// Energy balance model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyModelConfig {
    /// Daily deficit magnitudes for weight loss, per mode (kcal)
    pub lose_deficit: ModeDeltas,
    /// Daily surplus magnitudes for weight gain, per mode (kcal)
    pub gain_surplus: ModeDeltas,
    /// Minimum prescribed daily calories per gender
    pub calorie_floor: CalorieFloors,
    /// Energy of one kilogram of body mass change (kcal)
    pub kcal_per_kg: f64,
    /// Metabolic slowdown under sustained deficit
    pub adaptive_thermogenesis: AdaptiveThermogenesisConfig,
}

impl EnergyModelConfig {
    /// Signed daily calorie delta for a direction and mode
    #[must_use]
    pub fn delta_kcal(&self, direction: Direction, mode: Mode) -> f64 {
        match direction {
            Direction::Lose => -self.lose_deficit.for_mode(mode),
            Direction::Gain => self.gain_surplus.for_mode(mode),
            Direction::Maintain => 0.0,
        }
    }
}

impl Default for EnergyModelConfig {
    fn default() -> Self {
        Self {
            lose_deficit: ModeDeltas {
                light: 300.0,
                medium: 500.0,
                hard: 750.0,
            },
            gain_surplus: ModeDeltas {
                light: 200.0,
                medium: 350.0,
                hard: 500.0,
            },
            calorie_floor: CalorieFloors::default(),
            kcal_per_kg: KCAL_PER_KG_BODY_MASS,
            adaptive_thermogenesis: AdaptiveThermogenesisConfig::default(),
        }
    }
}

/// Unsigned calorie magnitudes per mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeDeltas {
    /// Light mode (kcal/day)
    pub light: f64,
    /// Medium mode (kcal/day)
    pub medium: f64,
    /// Hard mode (kcal/day)
    pub hard: f64,
}

impl ModeDeltas {
    /// Magnitude for a mode
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Light => self.light,
            Mode::Medium => self.medium,
            Mode::Hard => self.hard,
        }
    }
}

/// Minimum daily calories a plan may prescribe
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CalorieFloors {
    /// Male floor: 1500 kcal
    pub male: f64,
    /// Female floor: 1200 kcal
    pub female: f64,
}

impl CalorieFloors {
    /// Floor for a gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl Default for CalorieFloors {
    fn default() -> Self {
        Self {
            male: 1500.0,
            female: 1200.0,
        }
    }
}

/// Adaptive thermogenesis ramp applied to weight-loss weeks
///
/// After `start_week`, effective TDEE drops by `rate_per_week` for each further
/// week, capped at `max_reduction`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveThermogenesisConfig {
    /// Last week without adaptation (8)
    pub start_week: u32,
    /// Fractional TDEE reduction per week past `start_week` (0.005)
    pub rate_per_week: f64,
    /// Maximum fractional reduction (0.05)
    pub max_reduction: f64,
}

impl AdaptiveThermogenesisConfig {
    /// Fractional TDEE reduction for a simulated week
    #[must_use]
    pub fn reduction_for_week(&self, week: u32) -> f64 {
        if week <= self.start_week {
            return 0.0;
        }
        let weeks_adapting = f64::from(week - self.start_week);
        (self.rate_per_week * weeks_adapting).min(self.max_reduction)
    }
}

impl Default for AdaptiveThermogenesisConfig {
    fn default() -> Self {
        Self {
            start_week: 8,
            rate_per_week: 0.005,
            max_reduction: 0.05,
        }
    }
}

// ABOUTME: Effective daily energy balance shared by the forecast simulator and plan targets
// ABOUTME: TDEE at a weight, adaptive thermogenesis, mode delta and the gender calorie floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Balance
//!
//! The forecast and the prescribed plan targets both derive from
//! [`energy_balance`], so the calories a plan asks for are exactly the
//! calories the forecast assumes at week 0.

use crate::config::WeightPlanConfig;
use crate::metabolic::profile_tdee;
use serde::{Deserialize, Serialize};
use weightplan_core::models::{Direction, Mode, Profile};

/// One day of the energy model at a given weight and week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyBalance {
    /// TDEE at the simulated weight (kcal)
    pub tdee: f64,
    /// TDEE after adaptive thermogenesis (kcal)
    pub effective_tdee: f64,
    /// Prescribed calories after the gender floor (kcal)
    pub target_calories: f64,
    /// `target_calories - effective_tdee`; negative in a deficit
    pub balance: f64,
}

impl EnergyBalance {
    /// Body mass change over a week at this balance (kg, signed)
    #[must_use]
    pub fn weekly_change_kg(&self, days_per_week: f64, kcal_per_kg: f64) -> f64 {
        self.balance * days_per_week / kcal_per_kg
    }
}

/// Compute the energy balance for `weight_kg` in simulated `week`.
///
/// Adaptive thermogenesis applies to weight loss only. The gender floor
/// applies in every direction, so a floor above the unclamped target shrinks
/// a deficit (or widens a surplus) rather than being ignored.
#[must_use]
pub fn energy_balance(
    weight_kg: f64,
    profile: &Profile,
    mode: Mode,
    week: u32,
    direction: Direction,
    config: &WeightPlanConfig,
) -> EnergyBalance {
    let energy = &config.energy;
    let tdee = profile_tdee(profile, weight_kg, &config.metabolic);

    let reduction = match direction {
        Direction::Lose => energy.adaptive_thermogenesis.reduction_for_week(week),
        Direction::Gain | Direction::Maintain => 0.0,
    };
    let effective_tdee = tdee * (1.0 - reduction);

    let target_calories = (effective_tdee + energy.delta_kcal(direction, mode))
        .max(energy.calorie_floor.for_gender(profile.gender));

    EnergyBalance {
        tdee,
        effective_tdee,
        target_calories,
        balance: target_calories - effective_tdee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightplan_core::models::{ActivityLevel, Gender};

    #[test]
    fn test_week_zero_medium_loss() {
        let profile = Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate);
        let eb = energy_balance(
            90.0,
            &profile,
            Mode::Medium,
            0,
            Direction::Lose,
            &WeightPlanConfig::default(),
        );
        assert!((eb.tdee - 2914.0).abs() < 1e-9);
        assert!((eb.effective_tdee - 2914.0).abs() < 1e-9);
        assert!((eb.target_calories - 2414.0).abs() < 1e-9);
        assert!((eb.balance + 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_thermogenesis_lowers_effective_tdee_for_loss_only() {
        let profile = Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate);
        let config = WeightPlanConfig::default();
        let lose = energy_balance(90.0, &profile, Mode::Medium, 20, Direction::Lose, &config);
        let gain = energy_balance(90.0, &profile, Mode::Medium, 20, Direction::Gain, &config);
        assert!((lose.effective_tdee - 2914.0 * 0.95).abs() < 1e-9);
        assert!((gain.effective_tdee - 2914.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_shrinks_deficit() {
        // BMR 500 + 937.5 - 350 - 161 = 926.5, TDEE 1111.8
        let profile = Profile::new(Gender::Female, 70, 150.0, ActivityLevel::Low);
        let eb = energy_balance(
            50.0,
            &profile,
            Mode::Hard,
            0,
            Direction::Lose,
            &WeightPlanConfig::default(),
        );
        assert!((eb.target_calories - 1200.0).abs() < 1e-9);
        assert!(eb.balance > 0.0);
    }
}

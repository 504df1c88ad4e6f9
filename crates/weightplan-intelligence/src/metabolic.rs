// ABOUTME: Basal metabolic rate and total daily energy expenditure calculations
// ABOUTME: Mifflin-St Jeor equation scaled by activity level multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic Calculator
//!
//! Pure arithmetic over already-validated inputs; range checks live in
//! `weightplan_core::validation` and are the caller's responsibility.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, MetabolicConfig};
use weightplan_core::models::{ActivityLevel, Gender, Profile};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.gender_constant(gender)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// BMR of a profile at a given body weight
#[must_use]
pub fn profile_bmr(profile: &Profile, weight_kg: f64, config: &MetabolicConfig) -> f64 {
    calculate_mifflin_st_jeor(
        weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )
}

/// TDEE of a profile at a given body weight
#[must_use]
pub fn profile_tdee(profile: &Profile, weight_kg: f64, config: &MetabolicConfig) -> f64 {
    calculate_tdee(
        profile_bmr(profile, weight_kg, config),
        profile.activity_level,
        &config.activity_factors,
    )
}

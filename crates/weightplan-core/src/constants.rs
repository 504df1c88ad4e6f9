// ABOUTME: Physiological and nutritional constants used by the weight plan engine
// ABOUTME: Energy densities, accepted input ranges and rounding precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.
//!
//! Tunable model parameters (mode deltas, floors, tolerances) live in the
//! intelligence crate's configuration; the values here are fixed facts.

/// Energy content of macronutrients and body mass
pub mod energy {
    /// Protein: 4 kcal per gram
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate energy of one kilogram of body mass change
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days per simulated week
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Accepted input ranges, enforced by collaborators via [`crate::validation`]
pub mod ranges {
    /// Minimum age in years (Mifflin-St Jeor validated for ages 10+)
    pub const MIN_AGE_YEARS: u32 = 10;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: u32 = 100;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 350.0;
}

/// Output rounding precision (decimal places)
pub mod precision {
    /// Weights in a forecast and expected weights
    pub const WEIGHT_DECIMALS: i32 = 2;
    /// Calories and macro grams
    pub const NUTRIENT_DECIMALS: i32 = 1;
    /// Weekly rate of change
    pub const RATE_DECIMALS: i32 = 3;
    /// Deviation kg and percentages
    pub const DEVIATION_DECIMALS: i32 = 2;
    /// Progress and intake percentages
    pub const PERCENT_DECIMALS: i32 = 1;
}

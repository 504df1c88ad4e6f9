// ABOUTME: Range validation for profile and weight inputs
// ABOUTME: Used by collaborators before handing values to the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation helpers.
//!
//! The calculators assume plausible inputs and never re-check them. Callers that
//! accept raw user input run these checks first.

use crate::constants::ranges::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use crate::models::Profile;

/// Validate age, height and the numeric sanity of a profile
///
/// # Errors
///
/// Returns `ValueOutOfRange` naming the first offending field
pub fn validate_profile(profile: &Profile) -> AppResult<()> {
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&profile.age) {
        return Err(AppError::value_out_of_range(
            "age",
            format!("Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years"),
        ));
    }
    if !profile.height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&profile.height_cm)
    {
        return Err(AppError::value_out_of_range(
            "height_cm",
            format!("Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"),
        ));
    }
    Ok(())
}

/// Validate a body weight
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the weight is not finite or outside 30-350 kg
pub fn validate_weight(field: &str, weight_kg: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::value_out_of_range(
            field,
            format!("Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::{ActivityLevel, Gender};

    #[test]
    fn test_valid_profile_passes() {
        let profile = Profile::new(Gender::Female, 45, 165.0, ActivityLevel::Light);
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let profile = Profile::new(Gender::Female, 9, 165.0, ActivityLevel::Light);
        let error = validate_profile(&profile).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_height_out_of_range() {
        let profile = Profile::new(Gender::Male, 30, 251.0, ActivityLevel::Light);
        let error = validate_profile(&profile).unwrap_err();
        assert_eq!(error.context.field.as_deref(), Some("height_cm"));
    }

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(validate_weight("weight_kg", 30.0).is_ok());
        assert!(validate_weight("weight_kg", 350.0).is_ok());
        assert!(validate_weight("target_weight_kg", 29.9).is_err());
        assert!(validate_weight("weight_kg", f64::NAN).is_err());
    }
}

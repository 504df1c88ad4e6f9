// ABOUTME: Expected versus actual weight comparison for an active plan
// ABOUTME: Direction-aware signed deviation, on-track tolerance and recommendation class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightPlanConfig;
use weightplan_core::constants::precision::DEVIATION_DECIMALS;
use weightplan_core::math::round_to;
use weightplan_core::models::{Direction, ProgressVerdict, Recommendation};

/// Signed lag behind the expected weight; positive means behind plan
#[must_use]
pub fn signed_deviation(direction: Direction, expected_kg: f64, actual_kg: f64) -> f64 {
    match direction {
        Direction::Lose => actual_kg - expected_kg,
        Direction::Gain => expected_kg - actual_kg,
        Direction::Maintain => (actual_kg - expected_kg).abs(),
    }
}

/// Compare the latest measurement with the forecast's expectation.
///
/// The direction comes from the plan's start weight and target. `on_track`
/// is decided on the unrounded deviation; `deviation_kg` and `deviation_pct`
/// are reported rounded to 2 decimals.
#[must_use]
pub fn compare_progress(
    expected_kg: f64,
    actual_kg: f64,
    target_kg: f64,
    plan_start_kg: f64,
    config: &WeightPlanConfig,
) -> ProgressVerdict {
    let progress = &config.progress;
    let direction = Direction::resolve(
        plan_start_kg,
        target_kg,
        config.forecast.direction_tolerance_kg,
    );

    let deviation_kg = signed_deviation(direction, expected_kg, actual_kg);
    let on_track = deviation_kg <= progress.tolerance_for(direction);
    let base = expected_kg.abs().max(progress.min_pct_base_kg);
    let deviation_pct = deviation_kg / base * 100.0;

    ProgressVerdict {
        on_track,
        deviation_kg: round_to(deviation_kg, DEVIATION_DECIMALS),
        deviation_pct: round_to(deviation_pct, DEVIATION_DECIMALS),
        recommendation: if on_track {
            Recommendation::OnTrack
        } else {
            Recommendation::BehindPlan
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_behind_plan() {
        let verdict = compare_progress(80.0, 80.6, 75.0, 90.0, &WeightPlanConfig::default());
        assert!(!verdict.on_track);
        assert!((verdict.deviation_kg - 0.6).abs() < 1e-9);
        assert!((verdict.deviation_pct - 0.75).abs() < 1e-9);
        assert_eq!(verdict.recommendation, Recommendation::BehindPlan);
    }

    #[test]
    fn test_lose_ahead_is_negative_and_on_track() {
        let verdict = compare_progress(80.0, 79.2, 75.0, 90.0, &WeightPlanConfig::default());
        assert!(verdict.on_track);
        assert!((verdict.deviation_kg + 0.8).abs() < 1e-9);
        assert_eq!(verdict.recommendation, Recommendation::OnTrack);
    }

    #[test]
    fn test_gain_behind_plan() {
        let verdict = compare_progress(72.0, 71.2, 75.0, 70.0, &WeightPlanConfig::default());
        assert!(!verdict.on_track);
        assert!((verdict.deviation_kg - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_maintain_tighter_tolerance() {
        let config = WeightPlanConfig::default();
        let under = compare_progress(70.0, 69.6, 70.0, 70.0, &config);
        assert!(!under.on_track);
        assert!((under.deviation_kg - 0.4).abs() < 1e-9);
        let within = compare_progress(70.0, 70.25, 70.0, 70.0, &config);
        assert!(within.on_track);
    }

    #[test]
    fn test_pct_base_floor() {
        let verdict = compare_progress(0.0, 1.0, -5.0, 5.0, &WeightPlanConfig::default());
        assert!((verdict.deviation_pct - 1000.0).abs() < 1e-9);
    }
}

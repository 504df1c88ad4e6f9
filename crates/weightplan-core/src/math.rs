// ABOUTME: Numeric helpers shared by the calculators
// ABOUTME: Decimal rounding used for every reported weight, calorie and percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round `value` to `decimals` decimal places (half away from zero)
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

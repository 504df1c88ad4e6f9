// ABOUTME: Forecast simulator configuration
// ABOUTME: Week cap and the convergence and direction tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Forecast simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Hard cap on simulated weeks (260, about five years)
    pub max_weeks: u32,
    /// Distance to target at which the simulation stops (0.05 kg)
    pub convergence_tolerance_kg: f64,
    /// Distance below which current and target count as equal (0.01 kg)
    pub direction_tolerance_kg: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            max_weeks: 260,
            convergence_tolerance_kg: 0.05,
            direction_tolerance_kg: 0.01,
        }
    }
}

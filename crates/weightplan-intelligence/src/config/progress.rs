// ABOUTME: Progress comparator and plan escalator configuration
// ABOUTME: On-track tolerances per direction, percentage base and escalation threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use weightplan_core::models::Direction;

/// Progress comparison and escalation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// On-track tolerance for lose/gain plans (0.5 kg)
    pub directional_tolerance_kg: f64,
    /// On-track tolerance for maintenance (0.3 kg)
    pub maintain_tolerance_kg: f64,
    /// Lower bound of the expected weight used as percentage base (0.1 kg)
    pub min_pct_base_kg: f64,
    /// Lag beyond which the escalator steps the mode up (0.5 kg)
    pub escalation_threshold_kg: f64,
}

impl ProgressConfig {
    /// On-track tolerance for a direction
    #[must_use]
    pub const fn tolerance_for(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Lose | Direction::Gain => self.directional_tolerance_kg,
            Direction::Maintain => self.maintain_tolerance_kg,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            directional_tolerance_kg: 0.5,
            maintain_tolerance_kg: 0.3,
            min_pct_base_kg: 0.1,
            escalation_threshold_kg: 0.5,
        }
    }
}

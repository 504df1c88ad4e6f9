// ABOUTME: Weight plan model with intensity mode and derived goal direction
// ABOUTME: Mode (light/medium/hard), Direction (lose/maintain/gain) and the Plan record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan intensity tier controlling the size of the daily deficit or surplus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Smallest deficit/surplus
    Light,
    /// Default tier
    #[default]
    Medium,
    /// Largest deficit/surplus, terminal for escalation
    Hard,
}

impl Mode {
    /// All modes, easiest first
    pub const ALL: [Self; 3] = [Self::Light, Self::Medium, Self::Hard];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Next harder tier; `Hard` stays `Hard`
    #[must_use]
    pub const fn next_harder(self) -> Self {
        match self {
            Self::Light => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }

    /// Whether no harder tier exists
    #[must_use]
    pub const fn is_hardest(self) -> bool {
        matches!(self, Self::Hard)
    }

    /// Parse a mode, falling back to `Medium` for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "Unknown mode '{other}', expected light, medium or hard"
            ))
            .with_field("mode")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a weight goal, always derived from current vs target weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Target below current weight
    Lose,
    /// Target within tolerance of current weight
    Maintain,
    /// Target above current weight
    Gain,
}

impl Direction {
    /// Resolve the direction from `current` to `target`.
    ///
    /// Differences strictly smaller than `tolerance_kg` count as maintenance.
    #[must_use]
    pub fn resolve(current_kg: f64, target_kg: f64, tolerance_kg: f64) -> Self {
        if (target_kg - current_kg).abs() < tolerance_kg {
            Self::Maintain
        } else if target_kg < current_kg {
            Self::Lose
        } else {
            Self::Gain
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }

    /// Whether `weight_kg` has reached or passed `target_kg` for this direction.
    ///
    /// Maintenance has no finish line and never reports reached.
    #[must_use]
    pub fn target_reached(self, weight_kg: f64, target_kg: f64) -> bool {
        match self {
            Self::Lose => weight_kg <= target_kg,
            Self::Gain => weight_kg >= target_kg,
            Self::Maintain => false,
        }
    }
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}', expected lose, maintain or gain"
            ))
            .with_field("goal")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active weight plan as persisted by the storage collaborator.
///
/// The direction is intentionally not a field: it is recomputed from
/// `start_weight_kg` and `target_weight_kg` every time it is needed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Intensity tier
    pub mode: Mode,
    /// Calendar date of forecast week 0
    pub start_date: NaiveDate,
    /// Weight at plan start
    pub start_weight_kg: f64,
    /// Goal weight
    pub target_weight_kg: f64,
}

impl Plan {
    /// Create a new plan
    #[must_use]
    pub const fn new(
        mode: Mode,
        start_date: NaiveDate,
        start_weight_kg: f64,
        target_weight_kg: f64,
    ) -> Self {
        Self {
            mode,
            start_date,
            start_weight_kg,
            target_weight_kg,
        }
    }

    /// Direction derived from start and target weight
    #[must_use]
    pub fn direction(&self, tolerance_kg: f64) -> Direction {
        Direction::resolve(self.start_weight_kg, self.target_weight_kg, tolerance_kg)
    }

    /// Absolute distance between start and target
    #[must_use]
    pub fn distance_kg(&self) -> f64 {
        (self.start_weight_kg - self.target_weight_kg).abs()
    }

    /// Same plan with a different mode
    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}

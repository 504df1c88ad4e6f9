// ABOUTME: User profile model feeding the metabolic calculator
// ABOUTME: Gender, ActivityLevel and Profile with strict and lossy string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation and the calorie floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant, 1500 kcal floor)
    Male,
    /// Female (-161 kcal BMR constant, 1200 kcal floor)
    Female,
}

impl Gender {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected male or female"
            ))
            .with_field("gender")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (1.2)
    Low,
    /// Light exercise 1-3 days/week (1.375)
    Light,
    /// Moderate exercise 3-5 days/week (1.55)
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week (1.725)
    High,
    /// Very hard training or a physical job (1.9)
    VeryHigh,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Light,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Parse an activity level, falling back to `Moderate` for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "very_high" | "very-high" => Ok(Self::VeryHigh),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level '{other}'"
            ))
            .with_field("activity_level")),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static body profile supplied by the persistence collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Biological sex
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl Profile {
    /// Create a new profile
    #[must_use]
    pub const fn new(gender: Gender, age: u32, height_cm: f64, activity_level: ActivityLevel) -> Self {
        Self {
            gender,
            age,
            height_cm,
            activity_level,
        }
    }
}

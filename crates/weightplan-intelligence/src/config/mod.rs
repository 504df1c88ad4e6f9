// ABOUTME: Weight plan model configuration for the metabolic, forecast and progress engines
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Plan Configuration Module
//!
//! Every tunable constant of the engine lives in [`WeightPlanConfig`]. The
//! defaults reproduce the documented model; `WEIGHTPLAN_*` environment
//! variables or a JSON document can override individual values.
//!
//! # Module Structure
//!
//! - `metabolic` - Mifflin-St Jeor coefficients and activity factors
//! - `targets` - Onboarding goal deltas, macro splits and plan protein tables
//! - `energy` - Mode calorie deltas, gender floors and adaptive thermogenesis
//! - `forecast` - Simulator week cap and tolerances
//! - `progress` - On-track tolerances and escalation threshold

pub mod energy;
pub mod error;
pub mod forecast;
pub mod metabolic;
pub mod progress;
pub mod targets;

pub use energy::{AdaptiveThermogenesisConfig, CalorieFloors, EnergyModelConfig, ModeDeltas};
pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use metabolic::{ActivityFactorsConfig, BmrConfig, MetabolicConfig};
pub use progress::ProgressConfig;
pub use targets::{DailyTargetsConfig, MacroSplit, PlanTargetsConfig, ProteinPerKg};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::str::FromStr;

/// Allowed deviation of a macro split total from 1.0
const MACRO_SPLIT_TOLERANCE: f64 = 0.001;

/// Main weight plan configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightPlanConfig {
    /// BMR and TDEE model
    pub metabolic: MetabolicConfig,
    /// Onboarding daily targets
    pub daily_targets: DailyTargetsConfig,
    /// Energy balance model shared by forecast and plan targets
    pub energy: EnergyModelConfig,
    /// Forecast simulator limits
    pub forecast: ForecastConfig,
    /// Plan macro tables
    pub plan_targets: PlanTargetsConfig,
    /// Progress comparison and escalation thresholds
    pub progress: ProgressConfig,
}

impl WeightPlanConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a full or partial JSON document; absent sections and fields keep their defaults
    ///
    /// The document is overlaid on the serialized defaults before it is
    /// deserialized, so a nested table such as `energy.gain_surplus` keeps the
    /// defaults of its own role when only some of its fields are given.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the resulting values fail validation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metabolic()?;
        self.validate_daily_targets()?;
        self.validate_energy()?;
        self.validate_plan_targets()?;
        self.validate_forecast()?;
        self.validate_progress()
    }

    fn validate_metabolic(&self) -> Result<(), ConfigError> {
        let bmr = &self.metabolic.bmr;
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.metabolic.activity_factors;
        if factors.low < 1.0 || factors.very_high > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.low >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.high
            || factors.high >= factors.very_high
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_daily_targets(&self) -> Result<(), ConfigError> {
        let daily = &self.daily_targets;
        if daily.lose_delta_kcal > daily.maintain_delta_kcal
            || daily.maintain_delta_kcal > daily.gain_delta_kcal
        {
            return Err(ConfigError::InvalidRange(
                "goal deltas must satisfy lose <= maintain <= gain",
            ));
        }
        if daily.min_calories < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_calories must not be negative",
            ));
        }
        for split in [daily.lose_split, daily.maintain_split, daily.gain_split] {
            if [split.protein, split.fat, split.carbs]
                .iter()
                .any(|share| !(0.0..=1.0).contains(share))
            {
                return Err(ConfigError::ValueOutOfRange(
                    "macro shares must be between 0.0 and 1.0",
                ));
            }
            if (split.total() - 1.0).abs() > MACRO_SPLIT_TOLERANCE {
                return Err(ConfigError::InvalidWeights("macro split must sum to 1.0"));
            }
        }
        Ok(())
    }

    fn validate_energy(&self) -> Result<(), ConfigError> {
        let energy = &self.energy;
        for deltas in [energy.lose_deficit, energy.gain_surplus] {
            if deltas.light < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "mode calorie deltas must not be negative",
                ));
            }
            if deltas.light > deltas.medium || deltas.medium > deltas.hard {
                return Err(ConfigError::InvalidRange(
                    "mode calorie deltas must satisfy light <= medium <= hard",
                ));
            }
        }
        if energy.calorie_floor.male <= 0.0 || energy.calorie_floor.female <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie floors must be positive",
            ));
        }
        if energy.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be positive"));
        }
        let thermo = &energy.adaptive_thermogenesis;
        if thermo.rate_per_week < 0.0 || !(0.0..1.0).contains(&thermo.max_reduction) {
            return Err(ConfigError::ValueOutOfRange(
                "adaptive thermogenesis reduction must be within [0.0, 1.0)",
            ));
        }
        Ok(())
    }

    fn validate_plan_targets(&self) -> Result<(), ConfigError> {
        let plan = &self.plan_targets;
        for table in [plan.lose_protein_g_per_kg, plan.gain_protein_g_per_kg] {
            if table.light < 0.5 || table.hard > 3.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein recommendations must be between 0.5 and 3.0 g/kg",
                ));
            }
            if table.light > table.medium || table.medium > table.hard {
                return Err(ConfigError::InvalidRange(
                    "protein g/kg must satisfy light <= medium <= hard",
                ));
            }
        }
        if !(0.0..=2.0).contains(&plan.fat_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_g_per_kg must be between 0.0 and 2.0",
            ));
        }
        Ok(())
    }

    fn validate_forecast(&self) -> Result<(), ConfigError> {
        let forecast = &self.forecast;
        if forecast.max_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange("max_weeks must be at least 1"));
        }
        if forecast.convergence_tolerance_kg <= 0.0 || forecast.direction_tolerance_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "forecast tolerances must be positive",
            ));
        }
        Ok(())
    }

    fn validate_progress(&self) -> Result<(), ConfigError> {
        let progress = &self.progress;
        if progress.directional_tolerance_kg <= 0.0
            || progress.maintain_tolerance_kg <= 0.0
            || progress.min_pct_base_kg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "progress tolerances must be positive",
            ));
        }
        if progress.escalation_threshold_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "escalation_threshold_kg must not be negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy model
        Self::apply_env_var(
            "WEIGHTPLAN_LOSE_DEFICIT_LIGHT",
            &mut self.energy.lose_deficit.light,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_LOSE_DEFICIT_MEDIUM",
            &mut self.energy.lose_deficit.medium,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_LOSE_DEFICIT_HARD",
            &mut self.energy.lose_deficit.hard,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_GAIN_SURPLUS_LIGHT",
            &mut self.energy.gain_surplus.light,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_GAIN_SURPLUS_MEDIUM",
            &mut self.energy.gain_surplus.medium,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_GAIN_SURPLUS_HARD",
            &mut self.energy.gain_surplus.hard,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_CALORIE_FLOOR_MALE",
            &mut self.energy.calorie_floor.male,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_CALORIE_FLOOR_FEMALE",
            &mut self.energy.calorie_floor.female,
        )?;
        Self::apply_env_var("WEIGHTPLAN_KCAL_PER_KG", &mut self.energy.kcal_per_kg)?;
        Self::apply_env_var(
            "WEIGHTPLAN_THERMOGENESIS_START_WEEK",
            &mut self.energy.adaptive_thermogenesis.start_week,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_THERMOGENESIS_RATE",
            &mut self.energy.adaptive_thermogenesis.rate_per_week,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_THERMOGENESIS_MAX",
            &mut self.energy.adaptive_thermogenesis.max_reduction,
        )?;

        // Targets
        Self::apply_env_var(
            "WEIGHTPLAN_DAILY_MIN_CALORIES",
            &mut self.daily_targets.min_calories,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_FAT_G_PER_KG",
            &mut self.plan_targets.fat_g_per_kg,
        )?;

        // Forecast
        Self::apply_env_var("WEIGHTPLAN_FORECAST_MAX_WEEKS", &mut self.forecast.max_weeks)?;
        Self::apply_env_var(
            "WEIGHTPLAN_FORECAST_CONVERGENCE_KG",
            &mut self.forecast.convergence_tolerance_kg,
        )?;

        // Progress
        Self::apply_env_var(
            "WEIGHTPLAN_PROGRESS_TOLERANCE_KG",
            &mut self.progress.directional_tolerance_kg,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_MAINTAIN_TOLERANCE_KG",
            &mut self.progress.maintain_tolerance_kg,
        )?;
        Self::apply_env_var(
            "WEIGHTPLAN_ESCALATION_THRESHOLD_KG",
            &mut self.progress.escalation_threshold_kg,
        )?;

        Ok(self)
    }
}

/// Overlay `overrides` onto `base`, descending into objects present in both
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                merge_json(base_map.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}

// ABOUTME: Configuration error types for weight plan model validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and JSON input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for model configuration validation.

use thiserror::Error;
use weightplan_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordering between two related values is violated (e.g. light delta > medium delta)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ratios don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Malformed JSON configuration document
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

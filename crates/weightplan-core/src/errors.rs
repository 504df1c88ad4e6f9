// ABOUTME: Unified error types for the weight plan engine
// ABOUTME: Defines ErrorCode and AppError with field context and source chaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The calculators themselves never fail on domain input; errors only come from
//! parsing caller-supplied strings, range validation and configuration loading.
//! Everything funnels into [`AppError`] so binaries and collaborators see one shape.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// The value is outside the accepted physiological range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization of a result failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the caller can fix the error by changing its input
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::ValueOutOfRange)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending field, when known
    pub field: Option<String>,
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the name of the offending field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the accepted range
    pub fn value_out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_field(field)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert!(ErrorCode::ValueOutOfRange.is_client_error());
        assert!(ErrorCode::InvalidInput.is_client_error());
        assert!(!ErrorCode::ConfigInvalid.is_client_error());
        assert!(!ErrorCode::InternalError.is_client_error());
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::value_out_of_range("age", "Age must be between 10 and 100");

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.field.as_deref(), Some("age"));
        assert!(error.to_string().contains("Age must be between 10 and 100"));
    }

    #[test]
    fn test_config_error_is_not_client_error_and_keeps_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error = AppError::config("bad tuning").with_source(json_error);

        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(!error.code.is_client_error());
        assert!(StdError::source(&error).is_some());
        assert!(error.to_string().starts_with("Configuration is invalid"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error = AppError::from(json_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.context.field.is_none());
    }
}

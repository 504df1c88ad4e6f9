// ABOUTME: Core types and constants for the weight plan projection engine
// ABOUTME: Foundation crate with error handling, domain models, constants and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Plan Core
//!
//! Foundation crate providing shared types and constants for the weight plan
//! engine. This crate is designed to change infrequently, so the algorithm crate
//! and the binaries can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological and nutritional constants
//! - **models**: Profile, plan, forecast, targets and progress types
//! - **validation**: Range checks for profile and weight inputs
//! - **math**: Rounding helpers shared by every calculator

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological and nutritional constants organized by domain
pub mod constants;

/// Core data models (profile, plan, forecast, targets, progress)
pub mod models;

/// Input range validation for collaborators feeding the engine
pub mod validation;

/// Numeric helpers
pub mod math;

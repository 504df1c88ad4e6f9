// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup, reference profiles and anchor dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `weightplan`

use chrono::{Days, NaiveDate};
use std::env;
use std::sync::Once;
use tracing::Level;
use weightplan::models::{ActivityLevel, Gender, Profile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, WARN keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30 year old, 180 cm, moderately active male (BMR 1880 at 90 kg)
pub fn male_profile() -> Profile {
    Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate)
}

/// 35 year old, 168 cm, lightly active female
pub fn female_profile() -> Profile {
    Profile::new(Gender::Female, 35, 168.0, ActivityLevel::Light)
}

/// Small, sedentary, older female whose TDEE sits near the calorie floor
pub fn floor_bound_profile() -> Profile {
    Profile::new(Gender::Female, 70, 150.0, ActivityLevel::Low)
}

/// Every gender and activity level combination at a fixed age and height
pub fn all_profiles() -> Vec<Profile> {
    [Gender::Male, Gender::Female]
        .into_iter()
        .flat_map(|gender| {
            ActivityLevel::ALL
                .into_iter()
                .map(move |level| Profile::new(gender, 40, 170.0, level))
        })
        .collect()
}

/// Monday used as the default forecast anchor
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Date `days` after the anchor
pub fn days_after_anchor(days: u64) -> NaiveDate {
    anchor_date().checked_add_days(Days::new(days)).unwrap()
}

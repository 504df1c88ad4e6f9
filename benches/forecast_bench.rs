// ABOUTME: Criterion benchmarks for the weight plan engine
// ABOUTME: Measures forecast simulation, plan targets and batch plan checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the weight plan engine.
//!
//! Covers the weekly forecast simulator at short and capped horizons, the
//! plan target calculation and the parallel plan-check batch.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use weightplan::models::{ActivityLevel, Gender, Mode, Plan, Profile};
use weightplan::{PlanCheckInput, WeightPlanner};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

fn male() -> Profile {
    Profile::new(Gender::Male, 30, 180.0, ActivityLevel::Moderate)
}

/// Deterministic batch of plans with varied modes, profiles and weights
#[allow(clippy::cast_precision_loss)]
fn generate_plan_inputs(count: usize) -> Vec<PlanCheckInput> {
    (0..count)
        .map(|index| {
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            let level = ActivityLevel::ALL[index % ActivityLevel::ALL.len()];
            let mode = Mode::ALL[index % Mode::ALL.len()];
            let start = 70.0 + (index % 40) as f64;
            let target = start - 5.0 - (index % 10) as f64;
            PlanCheckInput {
                plan: Plan::new(mode, anchor(), start, target),
                profile: Profile::new(
                    gender,
                    25 + (index % 40) as u32,
                    160.0 + (index % 30) as f64,
                    level,
                ),
                latest_weight_kg: start - (index % 4) as f64,
            }
        })
        .collect()
}

/// Benchmark the forecast simulator from short plans to the week cap
fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast");
    let planner = WeightPlanner::default();
    let profile = male();

    let scenarios = [
        ("short_loss", 82.0, 80.0, Mode::Hard),
        ("reference_loss", 90.0, 80.0, Mode::Medium),
        ("long_loss", 150.0, 80.0, Mode::Light),
        ("gain", 65.0, 75.0, Mode::Medium),
    ];

    for (name, current, target, mode) in scenarios {
        group.bench_function(name, |b| {
            b.iter(|| {
                planner.forecast(
                    black_box(current),
                    black_box(target),
                    &profile,
                    mode,
                    anchor(),
                )
            });
        });
    }

    group.finish();
}

/// Benchmark target calculation for every mode
fn bench_plan_targets(c: &mut Criterion) {
    let planner = WeightPlanner::default();
    let profile = male();

    c.bench_function("plan_targets_all_modes", |b| {
        b.iter(|| {
            for mode in Mode::ALL {
                black_box(planner.plan_targets(black_box(90.0), black_box(80.0), &profile, mode));
            }
        });
    });
}

/// Benchmark the parallel plan-check batch with varying sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_check_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_plans");
    let planner = WeightPlanner::default();
    let today = anchor().checked_add_days(Days::new(56)).unwrap_or_default();

    for count in [10, 100, 1000] {
        let inputs = generate_plan_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("batch", count), &inputs, |b, inputs| {
            b.iter(|| planner.check_plans(black_box(inputs), today));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_forecast, bench_plan_targets, bench_check_plans);
criterion_main!(benches);

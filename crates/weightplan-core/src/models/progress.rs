// ABOUTME: Progress verdict and plan status models for the plan-check job
// ABOUTME: Recommendation classes, ProgressVerdict, PlanStatus and escalation outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::{Mode, Plan};
use super::targets::PlanTargets;
use serde::{Deserialize, Serialize};

/// Closed recommendation classification attached to a verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Measurement within tolerance of the forecast
    OnTrack,
    /// Measurement lags the forecast
    BehindPlan,
}

impl Recommendation {
    /// Short English description for logs and developer tooling
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::OnTrack => "on track, keep going",
            Self::BehindPlan => "behind plan, check adherence",
        }
    }
}

/// Outcome of comparing an actual measurement with the expected weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressVerdict {
    /// Whether the measurement is within the direction-specific tolerance
    pub on_track: bool,
    /// Signed deviation; positive means behind plan for lose/gain
    pub deviation_kg: f64,
    /// Deviation relative to the expected weight, in percent
    pub deviation_pct: f64,
    /// Recommendation class
    pub recommendation: Recommendation,
}

/// Snapshot of an active plan against today's measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanStatus {
    /// Goal weight
    pub target_weight_kg: f64,
    /// Current mode
    pub mode: Mode,
    /// Forecast weight for today
    pub expected_today: f64,
    /// Latest measured weight
    pub actual_latest: f64,
    /// Verdict for the measurement
    pub verdict: ProgressVerdict,
    /// Days since plan start (never negative)
    pub days_elapsed: u32,
    /// Days left until the forecast ends
    pub days_remaining: u32,
    /// Share of the start-to-target distance already covered, capped at 100
    pub progress_pct: f64,
}

/// A mode change performed by the escalator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Escalation {
    /// Mode before the check
    pub previous_mode: Mode,
    /// Mode after the check (equal to `previous_mode` when already at hard)
    pub new_mode: Mode,
    /// Targets recomputed from the latest actual weight
    pub targets: PlanTargets,
    /// The plan carrying the new mode, to be persisted by the caller
    pub updated_plan: Plan,
}

impl Escalation {
    /// Whether the mode actually moved
    #[must_use]
    pub fn mode_changed(&self) -> bool {
        self.previous_mode != self.new_mode
    }
}

/// Decision taken by one plan check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EscalationOutcome {
    /// The latest weight reached or passed the target; nothing else happens
    GoalReached,
    /// The plan lagged and was stepped up
    Escalated(Escalation),
    /// No mutation
    NoChange,
}

/// Full result of a plan check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanCheck {
    /// Forecast weight for the check date
    pub expected_kg: f64,
    /// Latest measured weight
    pub actual_kg: f64,
    /// Comparison verdict
    pub verdict: ProgressVerdict,
    /// Decision
    pub outcome: EscalationOutcome,
}

// ABOUTME: Weekly weight forecast models consumed by chart rendering and plan checks
// ABOUTME: ForecastPoint (week, date, weight) and the ordered WeightForecast sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One weekly point of a forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// Week index, 0 is the anchor point
    pub week: u32,
    /// Calendar date of this point (ISO-8601 on the wire)
    pub date: NaiveDate,
    /// Expected weight, rounded to 2 decimals
    pub weight_kg: f64,
}

/// Ordered weekly weight trajectory, week 0 first.
///
/// Serializes as a plain JSON array of points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WeightForecast {
    points: Vec<ForecastPoint>,
}

impl WeightForecast {
    /// Wrap an ordered list of points
    #[must_use]
    pub const fn from_points(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    /// Single anchor point forecast (maintenance or no distance to cover)
    #[must_use]
    pub fn anchor_only(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            points: vec![ForecastPoint {
                week: 0,
                date,
                weight_kg,
            }],
        }
    }

    /// All points, week 0 first
    #[must_use]
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of points including the anchor
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast holds no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at week `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ForecastPoint> {
        self.points.get(index)
    }

    /// The anchor point
    #[must_use]
    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    /// The last (converged or capped) point
    #[must_use]
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    /// Number of simulated weeks (points after the anchor)
    #[must_use]
    pub fn weeks(&self) -> u32 {
        self.points.last().map_or(0, |point| point.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_only_forecast() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let forecast = WeightForecast::anchor_only(date, 72.4);

        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast.weeks(), 0);
        assert_eq!(forecast.first(), forecast.last());
    }

    #[test]
    fn test_forecast_serializes_as_array() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let json = serde_json::to_value(WeightForecast::anchor_only(date, 72.4)).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["date"], "2025-01-06");
        assert_eq!(json[0]["week"], 0);
    }
}

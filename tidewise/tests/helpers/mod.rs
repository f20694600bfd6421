// Shared fixtures for orchestrator tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tidewise::{RawSample, RawSeries, TidewiseConnector, Unit};
use tidewise_mock::{DynamicMockConnector, DynamicMockController};

/// Reference "now" used across tests (2024-06-01T00:00:00Z).
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_717_200_000, 0).unwrap()
}

/// `now()` shifted by whole minutes.
pub fn at(minutes: i64) -> DateTime<Utc> {
    now() + TimeDelta::minutes(minutes)
}

/// Raw series in `unit` from `(minutes from now, value)` pairs.
pub fn raw(unit: Unit, points: &[(i64, Option<f64>)]) -> RawSeries {
    RawSeries::new(
        unit,
        points
            .iter()
            .map(|(m, v)| RawSample::new(at(*m), *v))
            .collect(),
    )
}

/// Tide heights in feet at a 6-minute cadence starting `start_min` from now.
pub fn feet_every_6min(start_min: i64, values: &[f64]) -> RawSeries {
    let pts: Vec<(i64, Option<f64>)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (start_min + 6 * i as i64, Some(*v)))
        .collect();
    raw(Unit::Feet, &pts)
}

/// A dynamic mock plus its controller, upcast for `with_connector`.
pub fn dynamic(name: &'static str) -> (Arc<dyn TidewiseConnector>, DynamicMockController) {
    DynamicMockConnector::new_with_controller(name)
}

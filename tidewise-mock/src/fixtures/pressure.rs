use std::f64::consts::TAU;

use chrono::TimeDelta;
use tidewise_core::{RawSample, RawSeries, Unit, WindowRequest};

use super::{grid, since_epoch};

/// Slow synoptic swing around 1016 hPa plus a semi-diurnal ripple, in pascals.
fn pascals_at(secs: f64) -> f64 {
    101_600.0 + 600.0 * (TAU * secs / 259_200.0).sin() + 40.0 * (TAU * secs / 43_200.0).cos()
}

/// Six-minute observations in pascals.
pub fn observations(req: WindowRequest) -> RawSeries {
    let samples = grid(req, TimeDelta::minutes(6))
        .map(|ts| RawSample::new(ts, Some(pascals_at(since_epoch(ts)).round())))
        .collect();
    RawSeries::new(Unit::Pascals, samples)
}

/// Hourly forecast in hectopascals; every third hour has no value.
pub fn forecast(req: WindowRequest) -> RawSeries {
    let samples = grid(req, TimeDelta::hours(1))
        .map(|ts| {
            let hour = ts.timestamp().div_euclid(3600);
            let value =
                (hour % 3 != 2).then(|| (pascals_at(since_epoch(ts)) / 10.0).round() / 10.0);
            RawSample::new(ts, value)
        })
        .collect();
    RawSeries::new(Unit::Hectopascals, samples)
}

//! Current value and short-term trend.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::series::Series;
use crate::{Derived, Sample, Shortfall, TrendLabel};

/// Label the trend from the last two samples of `series`.
///
/// Rising iff the most recent value is strictly greater than the one before
/// it; equal values resolve to Falling.
///
/// - Zero samples: `Unavailable(EmptyInput)`.
/// - One sample: `Unavailable(InsufficientData)`.
#[must_use]
pub fn classify_trend(series: &Series) -> Derived<TrendLabel> {
    classify_samples(series.samples())
}

fn classify_samples(samples: &[Sample]) -> Derived<TrendLabel> {
    match samples {
        [] => Derived::Unavailable(Shortfall::EmptyInput),
        [_] => Derived::Unavailable(Shortfall::InsufficientData),
        [.., prev, last] => Derived::Available(if last.value > prev.value {
            TrendLabel::Rising
        } else {
            TrendLabel::Falling
        }),
    }
}

/// Current value of a series together with its trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// The sample taken as "current".
    pub current: Sample,
    /// Trend leading into `current`; may be unavailable with a single sample.
    pub trend: Derived<TrendLabel>,
}

/// Reading from the most recent sample of an observed series.
#[must_use]
pub fn latest_reading(series: &Series) -> Derived<Reading> {
    match series.last() {
        None => Derived::Unavailable(Shortfall::EmptyInput),
        Some(&current) => Derived::Available(Reading {
            current,
            trend: classify_trend(series),
        }),
    }
}

/// Reading as of `now` for a series that extends past it (e.g. predictions).
///
/// The current sample is the last one strictly before `now`. If every sample
/// is at or after `now` the first sample is used and the trend comes from the
/// first two samples; if every sample precedes `now` this is the latest reading.
#[must_use]
pub fn reading_at(series: &Series, now: DateTime<Utc>) -> Derived<Reading> {
    let samples = series.samples();
    let Some(&first) = samples.first() else {
        return Derived::Unavailable(Shortfall::EmptyInput);
    };
    let split = samples.partition_point(|s| s.ts < now);
    let (current, leading) = if split == 0 {
        (first, &samples[..samples.len().min(2)])
    } else {
        (samples[split - 1], &samples[..split])
    };
    Derived::Available(Reading {
        current,
        trend: classify_samples(leading),
    })
}

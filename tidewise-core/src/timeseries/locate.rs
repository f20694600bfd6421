//! Point-in-time lookup: the value "as of" a target instant.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::series::Series;
use crate::{Derived, Sample, Shortfall};

/// Sample closest to `target` without exceeding it.
///
/// Scans forward keeping the closest match so far; among samples sharing the
/// best timestamp the earliest in series order wins. `None` if every sample
/// is after `target`.
#[must_use]
pub fn value_at_or_before(series: &Series, target: DateTime<Utc>) -> Option<Sample> {
    let mut best: Option<(TimeDelta, Sample)> = None;
    for s in series.iter().take_while(|s| s.ts <= target) {
        let distance = target - s.ts;
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, *s));
        }
    }
    best.map(|(_, s)| s)
}

/// Value a fixed offset before now, with a derived fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lookback {
    /// Value at (or just before) the target instant, or the fallback.
    pub value: f64,
    /// Instant of the matched sample; `None` when the fallback was used.
    pub at: Option<DateTime<Utc>>,
}

impl Lookback {
    /// True when no sample existed and the value was derived from the current one.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.at.is_none()
    }
}

/// Value at `now - offset`; when no sample is at or before that instant, the
/// latest value minus `fallback_delta`.
///
/// Returns `Unavailable(EmptyInput)` for an empty series.
#[must_use]
pub fn lookback(
    series: &Series,
    now: DateTime<Utc>,
    offset: TimeDelta,
    fallback_delta: f64,
) -> Derived<Lookback> {
    let Some(latest) = series.last() else {
        return Derived::Unavailable(Shortfall::EmptyInput);
    };
    let found = now
        .checked_sub_signed(offset)
        .and_then(|target| value_at_or_before(series, target));
    Derived::Available(match found {
        Some(s) => Lookback {
            value: s.value,
            at: Some(s.ts),
        },
        None => Lookback {
            value: latest.value - fallback_delta,
            at: None,
        },
    })
}

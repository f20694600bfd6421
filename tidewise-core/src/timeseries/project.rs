//! Next extremum after "now", with periodic extrapolation past the sampled window.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::{Derived, Extremum, ExtremumKind, Period, Shortfall};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// How a [`NextExtremum`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Projection {
    /// Taken directly from the detected extrema.
    Observed,
    /// Shifted forward by whole periods from the earliest extremum of its kind.
    /// The value is that extremum's value, not a re-estimate.
    Extrapolated,
}

/// The next high or low after a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextExtremum {
    /// Instant of the (possibly projected) extremum.
    pub ts: DateTime<Utc>,
    /// Value of the extremum.
    pub value: f64,
    /// High or low.
    pub kind: ExtremumKind,
    /// Whether `ts` was observed or extrapolated.
    pub projection: Projection,
}

impl NextExtremum {
    /// True when the result is an approximation rather than a detected extremum.
    #[must_use]
    pub const fn is_extrapolated(&self) -> bool {
        matches!(self.projection, Projection::Extrapolated)
    }
}

/// First extremum of `kind` strictly after `now`.
///
/// `extrema` must be in ascending timestamp order. When every extremum of
/// `kind` is at or before `now`, the earliest one is shifted by the smallest
/// whole number (at least one) of `period`s that lands strictly after `now`.
/// Returns `Unavailable(NoExtremumAvailable)` when `kind` never occurs.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tidewise::project::next_after",
        skip(extrema),
        fields(count = extrema.len()),
    )
)]
#[must_use]
pub fn next_after(
    extrema: &[Extremum],
    kind: ExtremumKind,
    now: DateTime<Utc>,
    period: Period,
) -> Derived<NextExtremum> {
    let mut of_kind = extrema.iter().filter(|e| e.kind == kind);
    let Some(earliest) = of_kind.next() else {
        return Derived::Unavailable(Shortfall::NoExtremumAvailable);
    };

    if let Some(e) = core::iter::once(earliest)
        .chain(of_kind)
        .find(|e| e.ts > now)
    {
        return Derived::Available(NextExtremum {
            ts: e.ts,
            value: e.value,
            kind,
            projection: Projection::Observed,
        });
    }

    match first_cycle_after(earliest.ts, now, period) {
        Some(ts) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                %kind,
                origin = %earliest.ts,
                projected = %ts,
                "extrapolated next extremum"
            );
            Derived::Available(NextExtremum {
                ts,
                value: earliest.value,
                kind,
                projection: Projection::Extrapolated,
            })
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                %kind,
                origin = %earliest.ts,
                "extrapolation left the representable range"
            );
            Derived::Unavailable(Shortfall::NoExtremumAvailable)
        }
    }
}

/// `origin + k * period` for the smallest `k >= 1` that lands strictly after `now`.
///
/// Computed in integer nanoseconds so the result equals repeated addition of
/// `period` exactly. `None` if the result is outside chrono's range.
#[must_use]
pub fn first_cycle_after(
    origin: DateTime<Utc>,
    now: DateTime<Utc>,
    period: Period,
) -> Option<DateTime<Utc>> {
    let step = total_nanos(period.as_delta());
    let elapsed = total_nanos(now - origin);
    let cycles = (elapsed.div_euclid(step) + 1).max(1);
    let offset = cycles.checked_mul(step)?;
    let secs = i64::try_from(offset.div_euclid(NANOS_PER_SEC)).ok()?;
    let nanos = u32::try_from(offset.rem_euclid(NANOS_PER_SEC)).ok()?;
    origin.checked_add_signed(TimeDelta::new(secs, nanos)?)
}

fn total_nanos(d: TimeDelta) -> i128 {
    i128::from(d.num_seconds()) * NANOS_PER_SEC + i128::from(d.subsec_nanos())
}

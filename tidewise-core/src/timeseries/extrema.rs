//! Local extrema (tidal highs and lows).
//!
//! Detection runs a tolerant windowed rule first and degrades to a strict
//! 3-point rule when the windowed rule finds fewer extrema than expected.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::series::Series;
use crate::{Derived, Extremum, ExtremumKind, Sample, Shortfall, TidewiseError};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parameters for [`find_extrema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremaParams {
    window: usize,
    min_per_kind: usize,
}

impl ExtremaParams {
    /// `window` is the half-width in samples of the tolerant rule; `min_per_kind`
    /// is the number of highs and of lows below which the tolerant result is
    /// discarded in favor of the strict rule.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `window` is zero.
    pub fn new(window: usize, min_per_kind: usize) -> Result<Self, TidewiseError> {
        if window == 0 {
            return Err(TidewiseError::InvalidArg(
                "extrema window must be at least 1".into(),
            ));
        }
        Ok(Self {
            window,
            min_per_kind,
        })
    }

    /// Half-width of the tolerant window, in samples.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Minimum highs and lows the tolerant rule must find.
    #[must_use]
    pub const fn min_per_kind(&self) -> usize {
        self.min_per_kind
    }
}

/// Which rule produced an [`Extrema`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetectionRule {
    /// Sample equals the max/min of its closed window.
    Tolerant,
    /// Sample is strictly above/below both neighbors.
    Strict,
}

/// Extrema of a series in ascending timestamp order, highs and lows interleaved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extrema {
    /// Detected extrema; at equal timestamps a high precedes a low.
    pub points: Vec<Extremum>,
    /// Rule that produced `points`.
    pub rule: DetectionRule,
}

impl Extrema {
    /// Extrema of one kind, in timestamp order.
    pub fn of_kind(&self, kind: ExtremumKind) -> impl Iterator<Item = &Extremum> {
        self.points.iter().filter(move |e| e.kind == kind)
    }

    /// Number of extrema of one kind.
    #[must_use]
    pub fn count(&self, kind: ExtremumKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Whether no extrema were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Find the local highs and lows of `series`.
///
/// The tolerant rule marks index `i` (with `W <= i < N - W`) as a high when its
/// value equals the maximum of `[i - W, i + W]` and as a low when it equals the
/// minimum; a flat window makes an index both. The result is discarded and the
/// strict rule used instead when the series is too short for a full window or
/// when fewer than `min_per_kind` highs or lows were found.
///
/// Returns `Unavailable(EmptyInput)` for an empty series. A series too short
/// for either rule yields an empty, available result.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tidewise::extrema::find_extrema",
        skip(series),
        fields(len = series.len(), window = params.window, min_per_kind = params.min_per_kind),
    )
)]
#[must_use]
pub fn find_extrema(series: &Series, params: ExtremaParams) -> Derived<Extrema> {
    let samples = series.samples();
    if samples.is_empty() {
        return Derived::Unavailable(Shortfall::EmptyInput);
    }

    let has_full_window = fits_window(samples.len(), params.window);
    if has_full_window {
        let points = tolerant_extrema(samples, params.window);
        let highs = points.iter().filter(|e| e.kind == ExtremumKind::High).count();
        let lows = points.len() - highs;
        if highs >= params.min_per_kind && lows >= params.min_per_kind {
            return Derived::Available(Extrema {
                points,
                rule: DetectionRule::Tolerant,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            highs,
            lows,
            min_per_kind = params.min_per_kind,
            "tolerant extrema below threshold; using strict rule"
        );
    }

    Derived::Available(Extrema {
        points: strict_extrema(samples),
        rule: DetectionRule::Strict,
    })
}

/// Tolerant windowed rule with half-width `window`.
///
/// Consecutive extrema of the same kind sharing a timestamp (duplicate
/// instants in the input) are collapsed to the first.
#[must_use]
pub fn tolerant_extrema(samples: &[Sample], window: usize) -> Vec<Extremum> {
    let mut out = Vec::new();
    if window == 0 || !fits_window(samples.len(), window) {
        return out;
    }

    let mut last_high: Option<DateTime<Utc>> = None;
    let mut last_low: Option<DateTime<Utc>> = None;
    for i in window..samples.len() - window {
        let neighborhood = &samples[i - window..=i + window];
        let (lo, hi) = neighborhood
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.value), hi.max(s.value))
            });
        let s = samples[i];
        if s.value == hi && last_high != Some(s.ts) {
            out.push(Extremum::at(s, ExtremumKind::High));
            last_high = Some(s.ts);
        }
        if s.value == lo && last_low != Some(s.ts) {
            out.push(Extremum::at(s, ExtremumKind::Low));
            last_low = Some(s.ts);
        }
    }
    out
}

// `len > 2 * window` without overflowing on huge configured windows.
fn fits_window(len: usize, window: usize) -> bool {
    window.checked_mul(2).is_some_and(|full| len > full)
}

/// Strict 3-point rule: strictly above (below) both immediate neighbors.
///
/// Never yields plateau duplicates; fewer than three samples yield nothing.
#[must_use]
pub fn strict_extrema(samples: &[Sample]) -> Vec<Extremum> {
    samples
        .windows(3)
        .filter_map(|w| {
            let (prev, cur, next) = (w[0].value, w[1].value, w[2].value);
            if cur > prev && cur > next {
                Some(Extremum::at(w[1], ExtremumKind::High))
            } else if cur < prev && cur < next {
                Some(Extremum::at(w[1], ExtremumKind::Low))
            } else {
                None
            }
        })
        .collect()
}

/// Degrade threshold derived from coverage: `per_day` extrema of each kind for
/// every whole day between the first and last sample.
#[must_use]
pub fn expected_extrema(series: &Series, per_day: u32) -> usize {
    let Some(coverage) = series.coverage() else {
        return 0;
    };
    let secs = coverage.num_seconds().max(0);
    let expected = secs.saturating_mul(i64::from(per_day)) / SECONDS_PER_DAY;
    usize::try_from(expected).unwrap_or(usize::MAX)
}

//! Continuous actual → forecast series for display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::series::{Forecast, Series};
use super::util::round_to_hundredths;
use crate::{Derived, Sample, Shortfall};

/// Produces a placeholder for a forecast point the provider left empty.
pub trait Synthesizer {
    /// Value for the missing point at `index` (0-based within the forecast),
    /// given the last observed value.
    fn synthesize(&self, last_actual: f64, index: usize) -> f64;
}

impl<F> Synthesizer for F
where
    F: Fn(f64, usize) -> f64,
{
    fn synthesize(&self, last_actual: f64, index: usize) -> f64 {
        self(last_actual, index)
    }
}

/// Small deterministic wobble around the last observed value:
/// `last + 0.05 * (j mod 4) - 0.03 * ((j div 4) mod 2)`, rounded to hundredths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceOscillation;

impl Synthesizer for ReferenceOscillation {
    #[allow(clippy::cast_precision_loss)]
    fn synthesize(&self, last_actual: f64, index: usize) -> f64 {
        let rise = 0.05 * (index % 4) as f64;
        let dip = 0.03 * ((index / 4) % 2) as f64;
        round_to_hundredths(last_actual + (rise - dip))
    }
}

/// Actual samples, a two-point bridge, and the completed forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StitchedSeries {
    /// Observed samples, unchanged.
    pub actual: Vec<Sample>,
    /// Last actual sample to first forecast sample; a rendering aid only.
    pub bridge: [Sample; 2],
    /// Forecast samples with every missing value filled in.
    pub forecast: Vec<Sample>,
    /// Indices into `forecast` whose values were synthesized.
    pub synthesized: Vec<usize>,
}

impl StitchedSeries {
    /// Whether the forecast value at `index` is a placeholder.
    #[must_use]
    pub fn is_synthesized(&self, index: usize) -> bool {
        self.synthesized.binary_search(&index).is_ok()
    }

    /// Actual then forecast samples, without the bridge.
    pub fn points(&self) -> impl Iterator<Item = &Sample> {
        self.actual.iter().chain(self.forecast.iter())
    }

    /// First actual and last forecast instants.
    #[must_use]
    pub fn span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.actual.first().map_or(self.bridge[0].ts, |s| s.ts);
        let end = self.forecast.last().map_or(self.bridge[1].ts, |s| s.ts);
        (start, end)
    }
}

/// Join `actual` to `forecast`, filling missing forecast values with `synth`.
///
/// Returns `Unavailable(EmptyInput)` if either side has no points.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tidewise::stitch::stitch",
        skip_all,
        fields(actual = actual.len(), forecast = forecast.len(), missing = forecast.missing()),
    )
)]
pub fn stitch<S>(actual: &Series, forecast: &Forecast, synth: &S) -> Derived<StitchedSeries>
where
    S: Synthesizer + ?Sized,
{
    let Some(&last_actual) = actual.last() else {
        return Derived::Unavailable(Shortfall::EmptyInput);
    };
    if forecast.is_empty() {
        return Derived::Unavailable(Shortfall::EmptyInput);
    }

    let mut synthesized = Vec::new();
    let completed: Vec<Sample> = forecast
        .points()
        .iter()
        .enumerate()
        .map(|(j, p)| {
            let value = p.value.unwrap_or_else(|| {
                synthesized.push(j);
                synth.synthesize(last_actual.value, j)
            });
            Sample::new(p.ts, value)
        })
        .collect();

    let bridge = [last_actual, completed[0]];
    Derived::Available(StitchedSeries {
        actual: actual.samples().to_vec(),
        bridge,
        forecast: completed,
        synthesized,
    })
}

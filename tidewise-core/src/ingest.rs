//! Ingestion boundary: unit normalization and the plausibility filter.
//!
//! Providers hand over raw, possibly unordered samples in their own unit with
//! missing values. Everything leaving this module is canonical-unit, finite,
//! within the configured [`SanityBound`], and sorted.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::timeseries::series::{Forecast, ForecastPoint, Series};
use crate::timeseries::util::round_to_hundredths;
use crate::{Quantity, Sample, SanityBound, TidewiseError, Unit};

/// A provider sample before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Instant the value refers to.
    pub ts: DateTime<Utc>,
    /// Value in the response unit, if the provider supplied one.
    pub value: Option<f64>,
}

impl RawSample {
    /// Construct a raw sample.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: Option<f64>) -> Self {
        Self { ts, value }
    }
}

/// A provider response: samples, the unit they are in, and an optional
/// station time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Unit of every value in `samples`.
    pub unit: Unit,
    /// Samples in provider order.
    pub samples: Vec<RawSample>,
    /// Station-local time zone, if known.
    pub timezone: Option<Tz>,
}

impl RawSeries {
    /// A response in `unit` without a time zone.
    #[must_use]
    pub const fn new(unit: Unit, samples: Vec<RawSample>) -> Self {
        Self {
            unit,
            samples,
            timezone: None,
        }
    }
}

/// What the filter did to a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Samples that made it through.
    pub kept: usize,
    /// Samples without a value (or with a non-finite one).
    pub missing: usize,
    /// Samples outside the sanity bound.
    pub implausible: usize,
}

/// Normalized data plus the filter statistics that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingested<T> {
    /// The normalized data.
    pub data: T,
    /// Counts of kept and dropped samples.
    pub stats: IngestStats,
}

fn to_canonical(
    value: f64,
    unit: Unit,
    quantity: Quantity,
) -> Result<f64, TidewiseError> {
    let target = quantity.canonical_unit();
    if unit == target {
        return Ok(value);
    }
    unit.convert(value, target).map(round_to_hundredths)
}

fn check_unit(unit: Unit, quantity: Quantity) -> Result<(), TidewiseError> {
    if unit.quantity() == quantity {
        Ok(())
    } else {
        Err(TidewiseError::Data(format!(
            "response unit {unit:?} does not measure {quantity:?}"
        )))
    }
}

/// Normalize an observed or predicted series.
///
/// Missing and non-finite values are dropped, converted values are rounded to
/// hundredths, values outside `bound` are dropped, and the rest is sorted.
///
/// # Errors
/// Returns `Data` if the response unit does not measure `quantity`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tidewise::ingest::ingest",
        skip(raw, bound),
        fields(unit = ?raw.unit, len = raw.samples.len()),
    )
)]
pub fn ingest(
    raw: RawSeries,
    quantity: Quantity,
    bound: &SanityBound,
) -> Result<Ingested<Series>, TidewiseError> {
    check_unit(raw.unit, quantity)?;
    let mut stats = IngestStats::default();
    let mut samples = Vec::with_capacity(raw.samples.len());
    for r in raw.samples {
        let Some(v) = r.value.filter(|v| v.is_finite()) else {
            stats.missing += 1;
            continue;
        };
        let v = to_canonical(v, raw.unit, quantity)?;
        if !bound.contains(v) {
            stats.implausible += 1;
            continue;
        }
        samples.push(Sample::new(r.ts, v));
    }
    stats.kept = samples.len();

    #[cfg(feature = "tracing")]
    if stats.missing + stats.implausible > 0 {
        tracing::debug!(
            kept = stats.kept,
            missing = stats.missing,
            implausible = stats.implausible,
            "dropped samples at ingestion"
        );
    }

    let mut series = Series::from_unsorted(samples)?;
    if let Some(tz) = raw.timezone {
        series = series.with_timezone(tz);
    }
    Ok(Ingested {
        data: series,
        stats,
    })
}

/// Normalize a forecast.
///
/// Unlike [`ingest`], missing values are kept as gaps for the stitcher to
/// fill; implausible values are dropped along with their instant.
///
/// # Errors
/// Returns `Data` if the response unit does not measure `quantity`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tidewise::ingest::ingest_forecast",
        skip(raw, bound),
        fields(unit = ?raw.unit, len = raw.samples.len()),
    )
)]
pub fn ingest_forecast(
    raw: RawSeries,
    quantity: Quantity,
    bound: &SanityBound,
) -> Result<Ingested<Forecast>, TidewiseError> {
    check_unit(raw.unit, quantity)?;
    let mut stats = IngestStats::default();
    let mut points = Vec::with_capacity(raw.samples.len());
    for r in raw.samples {
        let value = match r.value.filter(|v| v.is_finite()) {
            None => {
                stats.missing += 1;
                None
            }
            Some(v) => {
                let v = to_canonical(v, raw.unit, quantity)?;
                if !bound.contains(v) {
                    stats.implausible += 1;
                    continue;
                }
                Some(v)
            }
        };
        points.push(ForecastPoint::new(r.ts, value));
    }
    stats.kept = points.len();
    Ok(Ingested {
        data: Forecast::from_unsorted(points)?,
        stats,
    })
}

//! Validated, time-ordered containers handed to the engine.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::util::{ensure_finite, ensure_sorted};
use crate::{Sample, TidewiseError};

/// Ordered sequence of samples with non-decreasing timestamps and finite values.
///
/// An empty series is valid and means "no data available".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    samples: Vec<Sample>,
    timezone: Option<Tz>,
}

impl Series {
    /// Wrap already-ordered samples.
    ///
    /// # Errors
    /// - `Unsorted` if a timestamp precedes its predecessor.
    /// - `InvalidArg` if any value is NaN or infinite.
    pub fn new(samples: Vec<Sample>) -> Result<Self, TidewiseError> {
        ensure_sorted(&samples, |s| s.ts)?;
        for (i, s) in samples.iter().enumerate() {
            ensure_finite(s.value, i)?;
        }
        Ok(Self {
            samples,
            timezone: None,
        })
    }

    /// Sort samples by timestamp (stable, so equal instants keep input order) and wrap them.
    ///
    /// # Errors
    /// Returns `InvalidArg` if any value is NaN or infinite.
    pub fn from_unsorted(mut samples: Vec<Sample>) -> Result<Self, TidewiseError> {
        samples.sort_by_key(|s| s.ts);
        Self::new(samples)
    }

    /// Attach the time zone consumers should render instants in.
    #[must_use]
    pub const fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Display time zone, if the provider reported one.
    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Samples in timestamp order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest sample.
    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Most recent sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Iterate samples in timestamp order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Time between the first and last sample; `None` when empty.
    #[must_use]
    pub fn coverage(&self) -> Option<TimeDelta> {
        Some(self.last()?.ts - self.first()?.ts)
    }

    /// Samples with `start <= ts <= end`, keeping the time zone.
    #[must_use]
    pub fn window(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let lo = self.samples.partition_point(|s| s.ts < start);
        let hi = self.samples.partition_point(|s| s.ts <= end).max(lo);
        Self {
            samples: self.samples[lo..hi].to_vec(),
            timezone: self.timezone,
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// A forecast instant whose value the provider may have omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Instant the forecast refers to.
    pub ts: DateTime<Utc>,
    /// Forecast value in the canonical unit, if the provider supplied one.
    pub value: Option<f64>,
}

impl ForecastPoint {
    /// Construct a forecast point.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: Option<f64>) -> Self {
        Self { ts, value }
    }
}

/// Ordered forecast points; same ordering contract as [`Series`], values optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Wrap already-ordered forecast points.
    ///
    /// # Errors
    /// - `Unsorted` if a timestamp precedes its predecessor.
    /// - `InvalidArg` if a present value is NaN or infinite.
    pub fn new(points: Vec<ForecastPoint>) -> Result<Self, TidewiseError> {
        ensure_sorted(&points, |p| p.ts)?;
        for (i, p) in points.iter().enumerate() {
            if let Some(v) = p.value {
                ensure_finite(v, i)?;
            }
        }
        Ok(Self { points })
    }

    /// Sort points by timestamp (stable) and wrap them.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a present value is NaN or infinite.
    pub fn from_unsorted(mut points: Vec<ForecastPoint>) -> Result<Self, TidewiseError> {
        points.sort_by_key(|p| p.ts);
        Self::new(points)
    }

    /// Points in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How many points are missing a value.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_none()).count()
    }

    /// Points with `start <= ts <= end`.
    #[must_use]
    pub fn window(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let lo = self.points.partition_point(|p| p.ts < start);
        let hi = self.points.partition_point(|p| p.ts <= end).max(lo);
        Self {
            points: self.points[lo..hi].to_vec(),
        }
    }
}

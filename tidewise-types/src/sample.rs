//! Sample-level data transfer objects shared by the engine and its consumers.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observation or prediction: an instant and a real value.
///
/// All instants are carried as UTC so samples from one computation are always
/// comparable; a display time zone, if any, travels with the containing series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Instant the value refers to.
    pub ts: DateTime<Utc>,
    /// Value in the series' canonical unit.
    pub value: f64,
}

impl Sample {
    /// Construct a sample.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Which side of a cycle an extremum sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtremumKind {
    /// Local maximum (high tide).
    High,
    /// Local minimum (low tide).
    Low,
}

impl ExtremumKind {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected local extremum. Derived per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Instant of the extremal sample.
    pub ts: DateTime<Utc>,
    /// Value of the extremal sample.
    pub value: f64,
    /// High or low.
    pub kind: ExtremumKind,
}

impl Extremum {
    /// Build an extremum from the sample it was detected at.
    #[must_use]
    pub const fn at(sample: Sample, kind: ExtremumKind) -> Self {
        Self {
            ts: sample.ts,
            value: sample.value,
            kind,
        }
    }
}

/// Short-term direction of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    /// The most recent value is strictly above the one before it.
    Rising,
    /// The most recent value is at or below the one before it.
    Falling,
}

impl TrendLabel {
    /// Capitalized display label as shown on dashboards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Falling => "Falling",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

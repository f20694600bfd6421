//! Configuration types shared by the engine and the orchestrator.

use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::{Quantity, SanityBound, TidewiseError};

/// Strictly positive periodicity constant used to extrapolate cyclical extrema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Duration", into = "Duration")]
pub struct Period(TimeDelta);

impl Period {
    /// Wrap a duration as a period.
    ///
    /// # Errors
    /// Returns `InvalidArg` unless `delta` is strictly positive.
    pub fn new(delta: TimeDelta) -> Result<Self, TidewiseError> {
        if delta <= TimeDelta::zero() {
            return Err(TidewiseError::InvalidArg(format!(
                "period must be positive, got {delta}"
            )));
        }
        Ok(Self(delta))
    }

    /// Approximate semi-diurnal tidal period (12 h 25 min).
    #[must_use]
    pub fn semi_diurnal() -> Self {
        Self(TimeDelta::hours(12) + TimeDelta::minutes(25))
    }

    /// The period as a signed chrono duration.
    #[must_use]
    pub const fn as_delta(self) -> TimeDelta {
        self.0
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::semi_diurnal()
    }
}

impl TryFrom<Duration> for Period {
    type Error = TidewiseError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        let delta = TimeDelta::from_std(d)
            .map_err(|e| TidewiseError::InvalidArg(format!("period out of range: {e}")))?;
        Self::new(delta)
    }
}

impl From<Period> for Duration {
    fn from(p: Period) -> Self {
        // positive by construction
        p.0.to_std().unwrap_or_default()
    }
}

/// Tunables for the extrema/trend/continuity engine and the windows the
/// orchestrator requests from providers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Half-width, in samples, of the tolerant extrema window.
    pub extrema_window: usize,
    /// Minimum extrema of each kind expected per day of coverage before the
    /// detector degrades to the strict 3-point rule.
    pub min_extrema_per_day: u32,
    /// Periodicity used to project extrema past the sampled window.
    pub period: Period,
    /// How far back the lookback value is taken from.
    pub lookback: Duration,
    /// Subtracted from the current value when no sample exists at the lookback target.
    pub lookback_fallback_delta: f64,
    /// Tide predictions are requested from `now - tide_window_before`.
    pub tide_window_before: Duration,
    /// Tide predictions are requested up to `now + tide_window_after`.
    pub tide_window_after: Duration,
    /// Observations are kept from `now - actual_window` up to now.
    pub actual_window: Duration,
    /// Forecast points are kept from now up to `now + forecast_horizon`.
    pub forecast_horizon: Duration,
}

const HOUR: u64 = 3_600;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // 6-minute predictions: five samples is about half an hour each side
            extrema_window: 5,
            min_extrema_per_day: 2,
            period: Period::semi_diurnal(),
            lookback: Duration::from_secs(3 * HOUR),
            lookback_fallback_delta: 0.1,
            tide_window_before: Duration::from_secs(24 * HOUR),
            tide_window_after: Duration::from_secs(4 * 24 * HOUR),
            actual_window: Duration::from_secs(48 * HOUR),
            forecast_horizon: Duration::from_secs(8 * HOUR),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero extrema window, a non-finite fallback
    /// delta, or any window duration that is zero or too large for chrono.
    pub fn validate(&self) -> Result<(), TidewiseError> {
        if self.extrema_window == 0 {
            return Err(TidewiseError::InvalidArg(
                "extrema_window must be at least 1".into(),
            ));
        }
        if !self.lookback_fallback_delta.is_finite() {
            return Err(TidewiseError::InvalidArg(
                "lookback_fallback_delta must be finite".into(),
            ));
        }
        for (name, d) in [
            ("lookback", self.lookback),
            ("tide_window_before", self.tide_window_before),
            ("tide_window_after", self.tide_window_after),
            ("actual_window", self.actual_window),
            ("forecast_horizon", self.forecast_horizon),
        ] {
            to_delta(name, d)?;
        }
        Ok(())
    }
}

/// Convert a configured window into a chrono duration.
///
/// # Errors
/// Returns `InvalidArg` if `d` is zero or exceeds chrono's range.
pub fn to_delta(name: &str, d: Duration) -> Result<TimeDelta, TidewiseError> {
    if d.is_zero() {
        return Err(TidewiseError::InvalidArg(format!("{name} must be non-zero")));
    }
    TimeDelta::from_std(d)
        .map_err(|e| TidewiseError::InvalidArg(format!("{name} out of range: {e}")))
}

/// Global configuration for the `Tidewise` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidewiseConfig {
    /// Engine tunables and request windows.
    pub engine: EngineConfig,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Plausible tide heights, in feet.
    pub tide_height_bound: SanityBound,
    /// Plausible pressures, in inches of mercury.
    pub pressure_bound: SanityBound,
}

impl Default for TidewiseConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            provider_timeout: Duration::from_secs(5),
            tide_height_bound: SanityBound::default_for(Quantity::TideHeight),
            pressure_bound: SanityBound::default_for(Quantity::Pressure),
        }
    }
}

impl TidewiseConfig {
    /// Sanity bound configured for `quantity`.
    #[must_use]
    pub const fn bound_for(&self, quantity: Quantity) -> SanityBound {
        match quantity {
            Quantity::TideHeight => self.tide_height_bound,
            Quantity::Pressure => self.pressure_bound,
        }
    }

    /// Validate the whole configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an invalid engine section, a zero provider
    /// timeout, or a malformed sanity bound.
    pub fn validate(&self) -> Result<(), TidewiseError> {
        self.engine.validate()?;
        if self.provider_timeout.is_zero() {
            return Err(TidewiseError::InvalidArg(
                "provider_timeout must be non-zero".into(),
            ));
        }
        self.tide_height_bound.validate()?;
        self.pressure_bound.validate()
    }
}

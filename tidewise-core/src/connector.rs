use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TidewiseError;
use crate::ingest::RawSeries;
pub use tidewise_types::ConnectorKey;

/// Inclusive time window a provider is asked to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRequest {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (inclusive).
    pub end: DateTime<Utc>,
}

impl WindowRequest {
    /// Build a window, rejecting one whose end precedes its start.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TidewiseError> {
        if end < start {
            return Err(TidewiseError::InvalidArg(format!(
                "window end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// True if `ts` falls inside the window.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Focused role trait for connectors that provide tide-height predictions.
#[async_trait]
pub trait TidePredictionProvider: Send + Sync {
    /// Fetch predicted tide heights covering the window.
    async fn tide_predictions(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError>;
}

/// Focused role trait for connectors that provide observed barometric pressure.
#[async_trait]
pub trait PressureObservationProvider: Send + Sync {
    /// Fetch pressure observations covering the window.
    async fn pressure_observations(&self, req: WindowRequest)
    -> Result<RawSeries, TidewiseError>;
}

/// Focused role trait for connectors that provide a pressure forecast.
///
/// Forecast responses may contain samples without a value; those are kept as
/// gaps and filled in when the forecast is stitched to the observations.
#[async_trait]
pub trait PressureForecastProvider: Send + Sync {
    /// Fetch the pressure forecast covering the window.
    async fn pressure_forecast(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
///
/// A connector is bound to its station (or grid point) at construction time;
/// requests only carry the time window.
pub trait TidewiseConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "noaa-coops", "open-meteo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// If implemented, returns a trait object for tide predictions.
    fn as_tide_prediction_provider(&self) -> Option<&dyn TidePredictionProvider> {
        None
    }

    /// If implemented, returns a trait object for pressure observations.
    fn as_pressure_observation_provider(&self) -> Option<&dyn PressureObservationProvider> {
        None
    }

    /// If implemented, returns a trait object for pressure forecasts.
    fn as_pressure_forecast_provider(&self) -> Option<&dyn PressureForecastProvider> {
        None
    }
}

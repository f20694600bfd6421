//! Deterministic mock connector for tests and runnable examples.
//!
//! [`MockConnector`] serves synthetic fixture data keyed by a station id.
//! A few reserved ids simulate misbehaving feeds:
//!
//! - `"FAIL"`: every call fails with a connector error.
//! - `"TIMEOUT"`: every call sleeps briefly before answering, so an
//!   orchestrator with a short timeout gives up on it.
//! - `"DUMMY"`: tide predictions are a flat, implausible placeholder value.
//!
//! [`DynamicMockConnector`] defers every answer to a controller, for routing tests.
use std::time::Duration;

use async_trait::async_trait;
use tidewise_core::connector::{
    PressureForecastProvider, PressureObservationProvider, TidePredictionProvider,
    TidewiseConnector,
};
use tidewise_core::{RawSeries, TidewiseError, WindowRequest};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Station used by [`MockConnector::new`] (New London, CT).
pub const DEFAULT_STATION: &str = "8461490";

const TIMEOUT_STATION_DELAY: Duration = Duration::from_millis(200);

/// Mock connector for CI-safe examples. Provides deterministic data from fixtures.
#[derive(Debug, Clone, Copy)]
pub struct MockConnector {
    name: &'static str,
    station: &'static str,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Mock for the default station.
    #[must_use]
    pub const fn new() -> Self {
        Self::for_station(DEFAULT_STATION)
    }

    /// Mock bound to `station` (or one of the reserved behavior ids).
    #[must_use]
    pub const fn for_station(station: &'static str) -> Self {
        Self {
            name: "tidewise-mock",
            station,
        }
    }

    /// Same as [`for_station`](Self::for_station) with a custom connector name,
    /// so several mocks can be registered side by side.
    #[must_use]
    pub const fn named(name: &'static str, station: &'static str) -> Self {
        Self { name, station }
    }

    /// Station this mock answers for.
    #[must_use]
    pub const fn station(&self) -> &'static str {
        self.station
    }

    async fn maybe_fail_or_delay(
        &self,
        capability: &'static str,
    ) -> Result<&'static str, TidewiseError> {
        match self.station {
            "FAIL" => Err(TidewiseError::connector(
                self.name,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(TIMEOUT_STATION_DELAY).await;
                Ok(DEFAULT_STATION)
            }
            other => Ok(other),
        }
    }

    fn not_found(&self, what: &str) -> TidewiseError {
        TidewiseError::not_found(format!("{what} for station {}", self.station))
    }
}

impl TidewiseConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_tide_prediction_provider(&self) -> Option<&dyn TidePredictionProvider> {
        Some(self as &dyn TidePredictionProvider)
    }

    fn as_pressure_observation_provider(&self) -> Option<&dyn PressureObservationProvider> {
        Some(self as &dyn PressureObservationProvider)
    }

    fn as_pressure_forecast_provider(&self) -> Option<&dyn PressureForecastProvider> {
        Some(self as &dyn PressureForecastProvider)
    }
}

#[async_trait]
impl TidePredictionProvider for MockConnector {
    async fn tide_predictions(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError> {
        let station = self.maybe_fail_or_delay("tide-predictions").await?;
        if station == "DUMMY" {
            return Ok(fixtures::tide::placeholder(req));
        }
        fixtures::tide::predictions(station, req).ok_or_else(|| self.not_found("tide predictions"))
    }
}

#[async_trait]
impl PressureObservationProvider for MockConnector {
    async fn pressure_observations(
        &self,
        req: WindowRequest,
    ) -> Result<RawSeries, TidewiseError> {
        let station = self.maybe_fail_or_delay("pressure-observations").await?;
        if station == "DUMMY" {
            return Err(self.not_found("pressure observations"));
        }
        Ok(fixtures::pressure::observations(req))
    }
}

#[async_trait]
impl PressureForecastProvider for MockConnector {
    async fn pressure_forecast(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError> {
        let station = self.maybe_fail_or_delay("pressure-forecast").await?;
        if station == "DUMMY" {
            return Err(self.not_found("pressure forecast"));
        }
        Ok(fixtures::pressure::forecast(req))
    }
}

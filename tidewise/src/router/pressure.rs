use std::time::Duration;

use chrono::{DateTime, Utc};
use tidewise_core::{Capability, Forecast, Quantity, Series, TidewiseError};

use super::tide::window_around;
use crate::report::PressureReport;
use crate::{Tidewise, tidewise_router_fetch};

impl Tidewise {
    tidewise_router_fetch! {
        /// Fetch barometric pressure observations for the window, in inches of mercury.
        method: pressure_observations -> Series,
        accessor: as_pressure_observation_provider,
        capability: Capability::PressureObservations,
        quantity: Quantity::Pressure,
        ingest: tidewise_core::ingest,
        not_found: "pressure observations"
    }

    tidewise_router_fetch! {
        /// Fetch the pressure forecast for the window, in inches of mercury.
        ///
        /// Points without a value are kept as gaps.
        method: pressure_forecast -> Forecast,
        accessor: as_pressure_forecast_provider,
        capability: Capability::PressureForecast,
        quantity: Quantity::Pressure,
        ingest: tidewise_core::ingest_forecast,
        not_found: "pressure forecast"
    }

    /// Pressure report as of `now`: latest reading and trend, the value
    /// `lookback` ago, and observations stitched to the forecast.
    ///
    /// Observations (`[now - actual_window, now]`) and the forecast
    /// (`[now, now + forecast_horizon]`) are fetched concurrently. A failed
    /// forecast does not fail the report; `stitched` is then unavailable.
    ///
    /// # Errors
    /// Returns an error if the observation chain fails or a window cannot be
    /// represented around `now`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tidewise::router", skip(self), fields(now = %now))
    )]
    pub async fn pressure_report(
        &self,
        now: DateTime<Utc>,
    ) -> Result<PressureReport, TidewiseError> {
        let engine = &self.cfg.engine;
        let actual_req = window_around(now, engine.actual_window, Duration::ZERO)?;
        let forecast_req = window_around(now, Duration::ZERO, engine.forecast_horizon)?;

        let (actual, forecast) = futures::join!(
            self.pressure_observations(actual_req),
            self.pressure_forecast(forecast_req),
        );

        #[cfg(feature = "tracing")]
        if let Err(e) = &forecast {
            tracing::warn!(
                error = %e,
                "pressure forecast unavailable; report has no stitched series"
            );
        }

        PressureReport::build(now, engine, actual?, forecast, self.synth.as_ref())
    }
}

//! Consumer-facing reports assembled from provider data and the engine.
//!
//! Every derived field is a [`Derived`] value: renderers show "N/A" for any
//! shortfall instead of failing the whole report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tidewise_core::{
    ConnectorKey, Derived, EngineConfig, Extrema, ExtremaParams, ExtremumKind, Forecast,
    IngestStats, Ingested, Lookback, NextExtremum, Reading, Series, Shortfall, StitchedSeries,
    Synthesizer, TidewiseError, expected_extrema, find_extrema, latest_reading,
    lookback, next_after, reading_at, stitch, to_delta,
};

/// Data together with the connector that supplied it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    /// The data.
    pub data: T,
    /// Connector whose response was accepted.
    pub provider: ConnectorKey,
}

/// Tide conditions around an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TideReport {
    /// Instant the report describes.
    pub as_of: DateTime<Utc>,
    /// Predicted heights in feet, as plotted.
    pub series: Series,
    /// Current height and whether the tide is rising or falling.
    pub reading: Derived<Reading>,
    /// Highs and lows within the series.
    pub extrema: Derived<Extrema>,
    /// Next high tide after `as_of`.
    pub next_high: Derived<NextExtremum>,
    /// Next low tide after `as_of`.
    pub next_low: Derived<NextExtremum>,
    /// Connector that supplied the predictions.
    pub provider: ConnectorKey,
    /// What ingestion kept and dropped.
    pub stats: IngestStats,
}

impl TideReport {
    /// Run the engine over fetched predictions.
    ///
    /// The degrade threshold for extrema detection is
    /// `min_extrema_per_day` for every whole day the series covers.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the engine configuration has a zero extrema window.
    pub fn build(
        now: DateTime<Utc>,
        engine: &EngineConfig,
        fetched: Sourced<Ingested<Series>>,
    ) -> Result<Self, TidewiseError> {
        let Sourced {
            data: Ingested {
                data: series,
                stats,
            },
            provider,
        } = fetched;
        let params = ExtremaParams::new(
            engine.extrema_window,
            expected_extrema(&series, engine.min_extrema_per_day),
        )?;
        let extrema = find_extrema(&series, params);
        let next = |kind| {
            extrema
                .as_ref()
                .and_then(|ex| next_after(&ex.points, kind, now, engine.period))
        };
        Ok(Self {
            as_of: now,
            reading: reading_at(&series, now),
            next_high: next(ExtremumKind::High),
            next_low: next(ExtremumKind::Low),
            extrema,
            series,
            provider,
            stats,
        })
    }
}

/// Barometric pressure conditions at an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureReport {
    /// Instant the report describes.
    pub as_of: DateTime<Utc>,
    /// Observations in inches of mercury.
    pub actual: Series,
    /// Latest observation and its trend.
    pub reading: Derived<Reading>,
    /// Value `lookback` before `as_of`, or the derived fallback.
    pub lookback: Derived<Lookback>,
    /// Observations joined to the forecast, gaps filled.
    pub stitched: Derived<StitchedSeries>,
    /// Connector that supplied the observations.
    pub provider: ConnectorKey,
    /// Connector that supplied the forecast, if any succeeded.
    pub forecast_provider: Option<ConnectorKey>,
    /// Why the forecast is missing, when it is.
    pub forecast_error: Option<TidewiseError>,
}

impl PressureReport {
    /// Run the engine over fetched observations and the forecast outcome.
    ///
    /// Empty forecast points are filled by `synth`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured lookback is zero or out of range.
    pub fn build<S>(
        now: DateTime<Utc>,
        engine: &EngineConfig,
        actual: Sourced<Ingested<Series>>,
        forecast: Result<Sourced<Ingested<Forecast>>, TidewiseError>,
        synth: &S,
    ) -> Result<Self, TidewiseError>
    where
        S: Synthesizer + ?Sized,
    {
        let offset = to_delta("lookback", engine.lookback)?;
        let series = actual.data.data;
        let (stitched, forecast_provider, forecast_error) = match forecast {
            Ok(fc) => (
                stitch(&series, &fc.data.data, synth),
                Some(fc.provider),
                None,
            ),
            Err(e) => (Derived::Unavailable(Shortfall::EmptyInput), None, Some(e)),
        };
        Ok(Self {
            as_of: now,
            reading: latest_reading(&series),
            lookback: lookback(&series, now, offset, engine.lookback_fallback_delta),
            stitched,
            actual: series,
            provider: actual.provider,
            forecast_provider,
            forecast_error,
        })
    }
}

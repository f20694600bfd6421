use chrono::{DateTime, Utc};
use tidewise_core::{Capability, Quantity, Series, TidewiseError, WindowRequest};

use crate::report::TideReport;
use crate::{Tidewise, tidewise_router_fetch};

impl Tidewise {
    tidewise_router_fetch! {
        /// Fetch tide-height predictions for the window, in feet.
        ///
        /// Implausible heights (outside the configured tide bound) are dropped;
        /// a provider returning nothing plausible is skipped.
        method: tide_predictions -> Series,
        accessor: as_tide_prediction_provider,
        capability: Capability::TidePredictions,
        quantity: Quantity::TideHeight,
        ingest: tidewise_core::ingest,
        not_found: "tide predictions"
    }

    /// Tide report as of `now`: current height and trend, highs and lows, and
    /// the next high and low (extrapolated when the window holds none).
    ///
    /// Predictions are requested from `now - tide_window_before` to
    /// `now + tide_window_after`.
    ///
    /// # Errors
    /// Returns an error if the provider chain fails or the window cannot be
    /// represented around `now`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "tidewise::router", skip(self), fields(now = %now))
    )]
    pub async fn tide_report(&self, now: DateTime<Utc>) -> Result<TideReport, TidewiseError> {
        let engine = &self.cfg.engine;
        let req = window_around(now, engine.tide_window_before, engine.tide_window_after)?;
        let fetched = self.tide_predictions(req).await?;
        TideReport::build(now, engine, fetched)
    }
}

/// `[now - before, now + after]` as a provider request.
pub(crate) fn window_around(
    now: DateTime<Utc>,
    before: std::time::Duration,
    after: std::time::Duration,
) -> Result<WindowRequest, TidewiseError> {
    let out_of_range =
        || TidewiseError::InvalidArg(format!("request window around {now} out of range"));
    let start = if before.is_zero() {
        now
    } else {
        now.checked_sub_signed(tidewise_core::to_delta("window start", before)?)
            .ok_or_else(out_of_range)?
    };
    let end = if after.is_zero() {
        now
    } else {
        now.checked_add_signed(tidewise_core::to_delta("window end", after)?)
            .ok_or_else(out_of_range)?
    };
    WindowRequest::new(start, end)
}

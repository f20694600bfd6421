//! Tidewise orchestrates tide and barometric data across multiple providers.
//!
//! Overview
//! - Routes each capability (tide predictions, pressure observations, pressure
//!   forecast) through an ordered chain of connectors implementing the
//!   `tidewise_core` contracts; the first plausible response wins.
//! - Normalizes units and drops implausible samples at ingestion, so a feed
//!   returning placeholder data falls through to the next provider.
//! - Runs the `tidewise_core` engine over the result and assembles
//!   [`TideReport`] and [`PressureReport`] for renderers.
//!
//! Key behaviors and trade-offs
//! - Fallback is sequential and deterministic: each provider call is bounded by
//!   the provider timeout, so a chain of stalled providers costs one timeout each.
//! - Degraded results are values, not errors: a report with no next high, or a
//!   pressure report without a forecast, still renders with "N/A" fields.
//! - Extrapolated next extrema are flagged; their values repeat the earliest
//!   observed extremum rather than re-estimating.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use tidewise::{Capability, Tidewise};
//!
//! let primary = Arc::new(NoaaConnector::station("8461490"));
//! let backup = Arc::new(HarmonicsConnector::station("8461490"));
//!
//! let tw = Tidewise::builder()
//!     .with_connector(primary.clone())
//!     .with_connector(backup.clone())
//!     .prefer_for(Capability::TidePredictions, &[primary, backup])
//!     .build()?;
//!
//! let report = tw.tide_report(chrono::Utc::now()).await?;
//! if let Some(high) = report.next_high.available() {
//!     println!("next high {} ft at {}", high.value, high.ts);
//! }
//! ```
//!
//! See `tidewise/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod report;
mod router;

pub use core::{Tidewise, TidewiseBuilder};
pub use report::{PressureReport, Sourced, TideReport};
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use tidewise_core::{
    Capability, ConnectorKey, Derived, DetectionRule, EngineConfig, Extrema, Extremum,
    ExtremumKind, Forecast, ForecastPoint, IngestStats, Ingested, Lookback, NextExtremum, Period,
    Projection, Quantity, RawSample, RawSeries, Reading, ReferenceOscillation, Sample,
    SanityBound, Series, Shortfall, StitchedSeries, Synthesizer, TidewiseConfig,
    TidewiseConnector, TidewiseError, TrendLabel, Unit, WindowRequest,
};

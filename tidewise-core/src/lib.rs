//! tidewise-core
//!
//! The tide and pressure engine plus the traits data providers implement.
//!
//! - `types`: shared DTOs and configuration re-exported from `tidewise-types`.
//! - `derived`: the `Derived<T>` sentinel returned when a value cannot be produced.
//! - `timeseries`: trend, extrema, next-extremum projection, stitching and lookup.
//! - `ingest`: unit normalization and the plausibility filter for provider data.
//! - `connector`: the `TidewiseConnector` trait and capability provider traits.
//!
//! The engine is synchronous and clock-free: callers pass "now" explicitly.
//! Only the provider traits are async; they assume a Tokio 1.x runtime on the
//! orchestrator side but do not depend on Tokio themselves.
//!
#![warn(missing_docs)]

/// Connector capability traits and the primary `TidewiseConnector` interface.
pub mod connector;
/// Sentinel values for derived results that could not be produced.
pub mod derived;
/// Normalization of raw provider responses.
pub mod ingest;
/// Time-series engine.
pub mod timeseries;
pub mod types;

pub use connector::{TidewiseConnector, WindowRequest};
pub use derived::{Derived, Shortfall};
pub use ingest::{IngestStats, Ingested, RawSample, RawSeries, ingest, ingest_forecast};
pub use timeseries::extrema::{
    DetectionRule, Extrema, ExtremaParams, expected_extrema, find_extrema,
};
pub use timeseries::locate::{Lookback, lookback, value_at_or_before};
pub use timeseries::project::{NextExtremum, Projection, first_cycle_after, next_after};
pub use timeseries::series::{Forecast, ForecastPoint, Series};
pub use timeseries::stitch::{ReferenceOscillation, StitchedSeries, Synthesizer, stitch};
pub use timeseries::trend::{Reading, classify_trend, latest_reading, reading_at};
pub use types::*;

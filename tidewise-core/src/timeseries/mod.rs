//! The synchronous extrema/trend/continuity engine.
//!
//! Modules include:
//! - `series`: validated, time-ordered containers
//! - `trend`: current value and trend label
//! - `extrema`: tolerant windowed peak detection with strict fallback
//! - `project`: next extremum after now, with periodic extrapolation
//! - `stitch`: actual → forecast continuity with synthesized gaps
//! - `locate`: value as of a target instant
//!
//! Every function here is pure: no clock access, no I/O, inputs never mutated.
/// Local extrema detection.
pub mod extrema;
/// Point-in-time lookup.
pub mod locate;
/// Next-extremum projection.
pub mod project;
/// Validated series containers.
pub mod series;
/// Actual/forecast stitching.
pub mod stitch;
/// Trend classification and readings.
pub mod trend;
/// Shared validation and rounding helpers.
pub mod util;

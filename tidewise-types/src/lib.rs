//! Tidewise data transfer objects, units, and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod routing;
mod sample;
mod units;

pub use capability::Capability;
pub use config::{EngineConfig, Period, TidewiseConfig, to_delta};
pub use error::TidewiseError;
pub use routing::{ConnectorKey, ProviderPriority};
pub use sample::{Extremum, ExtremumKind, Sample, TrendLabel};
pub use units::{Quantity, SanityBound, Unit};

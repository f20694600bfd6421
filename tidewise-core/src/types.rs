//! Re-export of foundational types from `tidewise-types`.
// Downstream crates can depend on `tidewise-core` only.

pub use tidewise_types::{Capability, ConnectorKey, ProviderPriority, TidewiseError};
pub use tidewise_types::{EngineConfig, Period, TidewiseConfig, to_delta};
pub use tidewise_types::{Extremum, ExtremumKind, Sample, TrendLabel};
pub use tidewise_types::{Quantity, SanityBound, Unit};

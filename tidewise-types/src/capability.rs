use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with the provider roles a connector can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Predicted tide heights around now.
    TidePredictions,
    /// Observed barometric pressure (already happened).
    PressureObservations,
    /// Hourly pressure forecast, possibly with missing values.
    PressureForecast,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TidePredictions => "tide-predictions",
            Self::PressureObservations => "pressure-observations",
            Self::PressureForecast => "pressure-forecast",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

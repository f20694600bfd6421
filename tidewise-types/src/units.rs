//! Physical quantities, their units, and the plausibility bound applied at ingestion.

use serde::{Deserialize, Serialize};

use crate::TidewiseError;

/// Physical quantity a series measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Water level above chart datum.
    TideHeight,
    /// Barometric pressure.
    Pressure,
}

impl Quantity {
    /// Unit every series of this quantity is normalized to before reaching the engine.
    #[must_use]
    pub const fn canonical_unit(self) -> Unit {
        match self {
            Self::TideHeight => Unit::Feet,
            Self::Pressure => Unit::InchesOfMercury,
        }
    }
}

/// Units providers report values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Feet (tide height).
    Feet,
    /// Meters (tide height).
    Meters,
    /// Pascals (pressure).
    Pascals,
    /// Hectopascals / millibars (pressure).
    Hectopascals,
    /// Inches of mercury (pressure).
    InchesOfMercury,
}

impl Unit {
    /// Quantity this unit measures.
    #[must_use]
    pub const fn quantity(self) -> Quantity {
        match self {
            Self::Feet | Self::Meters => Quantity::TideHeight,
            Self::Pascals | Self::Hectopascals | Self::InchesOfMercury => Quantity::Pressure,
        }
    }

    // Multiplier taking one unit of `self` to the canonical unit of its quantity.
    const fn to_canonical_factor(self) -> f64 {
        match self {
            Self::Feet | Self::InchesOfMercury => 1.0,
            Self::Meters => 3.280_84,
            Self::Pascals => 0.000_295_301,
            Self::Hectopascals => 0.029_530_1,
        }
    }

    /// Convert `value` from `self` into `target`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the two units measure different quantities.
    pub fn convert(self, value: f64, target: Self) -> Result<f64, TidewiseError> {
        if self.quantity() != target.quantity() {
            return Err(TidewiseError::InvalidArg(format!(
                "cannot convert {self:?} to {target:?}"
            )));
        }
        if self == target {
            return Ok(value);
        }
        Ok(value * self.to_canonical_factor() / target.to_canonical_factor())
    }
}

/// Inclusive range of values considered physically plausible for a feed.
///
/// Values outside the bound are treated as provider garbage (placeholder or
/// dummy data) and dropped at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanityBound {
    /// Smallest plausible value.
    pub min: f64,
    /// Largest plausible value.
    pub max: f64,
}

impl SanityBound {
    /// Build a bound.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either end is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, TidewiseError> {
        let b = Self { min, max };
        b.validate()?;
        Ok(b)
    }

    /// Check the bound itself is well formed.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either end is not finite or `min > max`.
    pub fn validate(&self) -> Result<(), TidewiseError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(TidewiseError::InvalidArg(format!(
                "invalid sanity bound [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether `value` is finite and within the bound.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Default plausible range for a quantity in its canonical unit.
    #[must_use]
    pub const fn default_for(quantity: Quantity) -> Self {
        match quantity {
            // feet above MLLW; anything past this is a placeholder, not a tide
            Quantity::TideHeight => Self {
                min: -10.0,
                max: 20.0,
            },
            // inHg; the sea-level record range is roughly 25.7..32.1
            Quantity::Pressure => Self {
                min: 25.0,
                max: 32.5,
            },
        }
    }
}

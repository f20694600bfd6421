//! Shared helpers for series validation and numeric normalization.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::TidewiseError;

/// Ensure items are ordered by non-decreasing timestamp.
///
/// # Errors
/// Returns `Unsorted` naming the first item whose timestamp precedes its predecessor.
pub fn ensure_sorted<T, F>(items: &[T], ts_of: F) -> Result<(), TidewiseError>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    match items.windows(2).position(|w| ts_of(&w[1]) < ts_of(&w[0])) {
        Some(i) => Err(TidewiseError::Unsorted { index: i + 1 }),
        None => Ok(()),
    }
}

/// Ensure a value is finite.
///
/// # Errors
/// Returns `InvalidArg` for NaN or infinite values, naming the offending index.
pub fn ensure_finite(value: f64, index: usize) -> Result<(), TidewiseError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TidewiseError::InvalidArg(format!(
            "non-finite value {value} at index {index}"
        )))
    }
}

/// Round to two decimal places, ties to even, on the exact binary value of `v`.
///
/// Values `Decimal` cannot represent are returned unchanged.
#[must_use]
pub fn round_to_hundredths(v: f64) -> f64 {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(v)
}

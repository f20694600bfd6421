//! Sentinel results for degraded-but-expected conditions.
//!
//! Upstream feeds are unreliable, so "no data", "not enough data", and "no
//! extremum of that kind" are steady states rather than failures. Engine
//! operations return [`Derived`] for them and keep `Err` for contract
//! violations only. Renderers treat every [`Shortfall`] as "N/A".

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why a derived value could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shortfall {
    /// The input series has zero samples.
    EmptyInput,
    /// The input has samples, but fewer than this calculation needs.
    InsufficientData,
    /// The requested extremum kind never appears in the extrema list.
    NoExtremumAvailable,
}

impl Shortfall {
    /// Stable kebab-case identifier for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty-input",
            Self::InsufficientData => "insufficient-data",
            Self::NoExtremumAvailable => "no-extremum-available",
        }
    }
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value derived from a series, or the reason it is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Derived<T> {
    /// The computation produced a value.
    Available(T),
    /// The computation could not produce a value.
    Unavailable(Shortfall),
}

impl<T> Derived<T> {
    /// Whether a value is present.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The value, discarding the shortfall reason.
    #[must_use]
    pub fn available(self) -> Option<T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    /// Borrow the value, if present.
    #[must_use]
    pub const fn as_ref(&self) -> Derived<&T> {
        match self {
            Self::Available(v) => Derived::Available(v),
            Self::Unavailable(s) => Derived::Unavailable(*s),
        }
    }

    /// The shortfall reason, if no value is present.
    #[must_use]
    pub const fn shortfall(&self) -> Option<Shortfall> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable(s) => Some(*s),
        }
    }

    /// The value, or `default` when unavailable.
    pub fn unwrap_or(self, default: T) -> T {
        self.available().unwrap_or(default)
    }

    /// Map the value, preserving the shortfall.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Derived<U> {
        match self {
            Self::Available(v) => Derived::Available(f(v)),
            Self::Unavailable(s) => Derived::Unavailable(s),
        }
    }

    /// Chain a computation that may itself fall short.
    pub fn and_then<U, F: FnOnce(T) -> Derived<U>>(self, f: F) -> Derived<U> {
        match self {
            Self::Available(v) => f(v),
            Self::Unavailable(s) => Derived::Unavailable(s),
        }
    }
}

impl<T> From<Derived<T>> for Option<T> {
    fn from(d: Derived<T>) -> Self {
        d.available()
    }
}

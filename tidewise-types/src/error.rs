use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tidewise workspace.
///
/// Only contract violations and ingestion failures are errors. Degraded but
/// expected conditions (no data, too little data, no extremum of a kind) are
/// reported by the engine as sentinel values instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TidewiseError {
    /// No registered connector serves this kind of feed.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability label describing what was requested (e.g. "tide-predictions").
        capability: String,
    },

    /// A feed answered with data the engine cannot use, such as a pressure
    /// series labelled in feet.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Samples handed to the engine were not ordered by timestamp.
    #[error("samples out of order at index {index}")]
    Unsorted {
        /// Index of the first sample whose timestamp precedes its predecessor.
        index: usize,
    },

    /// One station feed failed outright (HTTP error, bad payload).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Anything a connector could not classify.
    #[error("unknown error: {0}")]
    Other(String),

    /// The feed has nothing for the station and window, or nothing plausible.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "tide predictions for 8461490".
        what: String,
    },

    /// Every feed in the chain failed, in chain order.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<TidewiseError>),

    /// One feed did not answer within `provider_timeout`.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "pressure-observations").
        capability: String,
    },

    /// Every feed asked for this capability stalled.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },
}

impl TidewiseError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Whether a dashboard should show this as a fault rather than "N/A".
    ///
    /// A station without a feed for some capability, or a feed with no data
    /// for the window, is routine. A chain is actionable if any member is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Per-feed errors, with nested chains expanded in place.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

//! Connector identity and per-capability provider ordering.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::Capability;

/// Typed key for identifying connectors in priority configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConnectorKey(&'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Ordered provider preferences per capability.
///
/// A preference list is an ordering hint: connectors that are not listed stay
/// eligible and are tried after the listed ones, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderPriority {
    per_capability: HashMap<Capability, Vec<ConnectorKey>>,
}

impl ProviderPriority {
    /// Create an empty priority table (registration order everywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the preference list for `capability`.
    pub fn set(&mut self, capability: Capability, keys: &[ConnectorKey]) {
        self.per_capability.insert(capability, keys.to_vec());
    }

    /// Preference list for `capability`, if one was configured.
    #[must_use]
    pub fn get(&self, capability: Capability) -> Option<&[ConnectorKey]> {
        self.per_capability.get(&capability).map(Vec::as_slice)
    }

    /// Rank of a connector for `capability`; unlisted connectors rank last.
    #[must_use]
    pub fn rank(&self, capability: Capability, name: &str) -> usize {
        self.get(capability)
            .and_then(|keys| keys.iter().position(|k| k.as_str() == name))
            .unwrap_or(usize::MAX)
    }

    /// Drop keys that do not name a registered connector and remove duplicates,
    /// keeping the first occurrence.
    pub fn retain_known(&mut self, known: &HashSet<&'static str>) {
        for keys in self.per_capability.values_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            keys.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }
    }
}

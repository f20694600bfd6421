use std::collections::HashSet;
use std::sync::Arc;

use tidewise_core::{
    Capability, ConnectorKey, EngineConfig, ProviderPriority, Quantity, RawSeries,
    ReferenceOscillation, SanityBound, Synthesizer, TidewiseConfig, TidewiseConnector,
    TidewiseError,
};

/// Gap filler shared by every pressure report of one orchestrator.
pub(crate) type SharedSynthesizer = Arc<dyn Synthesizer + Send + Sync>;

use crate::report::Sourced;
use crate::router::util::collapse_errors;

/// Orchestrator that routes requests across registered providers.
pub struct Tidewise {
    pub(crate) connectors: Vec<Arc<dyn TidewiseConnector>>,
    pub(crate) cfg: TidewiseConfig,
    pub(crate) priority: ProviderPriority,
    pub(crate) synth: SharedSynthesizer,
}

/// Builder for constructing a `Tidewise` orchestrator with custom configuration.
pub struct TidewiseBuilder {
    connectors: Vec<Arc<dyn TidewiseConnector>>,
    cfg: TidewiseConfig,
    priority: ProviderPriority,
    synth: SharedSynthesizer,
}

impl Default for TidewiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TidewiseBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: TidewiseConfig::default(),
            priority: ProviderPriority::new(),
            synth: Arc::new(ReferenceOscillation),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the fallback order for any capability without an
    /// explicit preference (see [`prefer_for`](Self::prefer_for)).
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn TidewiseConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for a capability using connector instances.
    ///
    /// The list orders eligible providers; it does not filter out unlisted
    /// connectors, which are still tried after the listed ones.
    #[must_use]
    pub fn prefer_for(
        mut self,
        capability: Capability,
        connectors_desc: &[Arc<dyn TidewiseConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc.iter().map(|c| c.key()).collect();
        self.priority.set(capability, &keys);
        self
    }

    /// Replace the whole configuration (e.g. one loaded with serde).
    #[must_use]
    pub const fn config(mut self, cfg: TidewiseConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the engine tunables and request windows.
    #[must_use]
    pub const fn engine(mut self, engine: EngineConfig) -> Self {
        self.cfg.engine = engine;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the plausible range for a quantity, in its canonical unit.
    ///
    /// Samples outside the range are dropped at ingestion; a provider left
    /// with no samples is skipped in favor of the next one.
    #[must_use]
    pub const fn sanity_bound(mut self, quantity: Quantity, bound: SanityBound) -> Self {
        match quantity {
            Quantity::TideHeight => self.cfg.tide_height_bound = bound,
            Quantity::Pressure => self.cfg.pressure_bound = bound,
        }
        self
    }

    /// Fill forecast points the provider left empty with `synth` instead of
    /// [`ReferenceOscillation`].
    #[must_use]
    pub fn forecast_synthesizer<S>(mut self, synth: S) -> Self
    where
        S: Synthesizer + Send + Sync + 'static,
    {
        self.synth = Arc::new(synth);
        self
    }

    /// Build the `Tidewise` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, if two
    /// connectors share a name, or if the configuration is invalid.
    pub fn build(mut self) -> Result<Tidewise, TidewiseError> {
        if self.connectors.is_empty() {
            return Err(TidewiseError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let mut known: HashSet<&'static str> = HashSet::new();
        for c in &self.connectors {
            if !known.insert(c.name()) {
                return Err(TidewiseError::InvalidArg(format!(
                    "connector name registered twice: {}",
                    c.name()
                )));
            }
        }
        self.cfg.validate()?;
        // Preference keys naming unregistered connectors are dropped.
        self.priority.retain_known(&known);

        Ok(Tidewise {
            connectors: self.connectors,
            cfg: self.cfg,
            priority: self.priority,
            synth: self.synth,
        })
    }
}

/// Attribute an untagged provider error to the connector that produced it.
pub fn tag_err(connector: &str, e: TidewiseError) -> TidewiseError {
    match e {
        e @ (TidewiseError::NotFound { .. }
        | TidewiseError::ProviderTimeout { .. }
        | TidewiseError::Connector { .. }
        | TidewiseError::AllProvidersTimedOut { .. }
        | TidewiseError::AllProvidersFailed(_)) => e,
        other => TidewiseError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Tidewise {
    /// Start building a new `Tidewise` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use tidewise::{Capability, Tidewise};
    ///
    /// let noaa = Arc::new(NoaaConnector::station("8461490"));
    /// let backup = Arc::new(HarmonicsConnector::station("8461490"));
    ///
    /// let tw = Tidewise::builder()
    ///     .with_connector(noaa.clone())
    ///     .with_connector(backup.clone())
    ///     .prefer_for(Capability::TidePredictions, &[noaa, backup])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> TidewiseBuilder {
        TidewiseBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TidewiseConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidewise::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, TidewiseError>
    where
        Fut: core::future::Future<Output = Result<T, TidewiseError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(TidewiseError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Registered connectors in fallback order for `capability`.
    pub(crate) fn ordered(&self, capability: Capability) -> Vec<Arc<dyn TidewiseConnector>> {
        let mut out: Vec<(usize, Arc<dyn TidewiseConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        out.sort_by_key(|(orig_i, c)| (self.priority.rank(capability, c.name()), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Try capable providers in priority order; first accepted response wins.
    ///
    /// `call` returns `None` for connectors lacking the capability. `accept`
    /// normalizes a raw response and may reject it (e.g. nothing plausible
    /// survived ingestion), in which case the next provider is tried.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tidewise::core::fetch_chain",
            skip(self, call, accept),
            fields(capability = %capability),
        )
    )]
    pub(crate) async fn fetch_chain<T, F, Fut, A>(
        &self,
        capability: Capability,
        not_found_what: String,
        call: F,
        accept: A,
    ) -> Result<Sourced<T>, TidewiseError>
    where
        F: Fn(Arc<dyn TidewiseConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<RawSeries, TidewiseError>>,
        A: Fn(&'static str, RawSeries) -> Result<T, TidewiseError>,
    {
        let mut attempted_any = false;
        let mut errors: Vec<TidewiseError> = Vec::new();

        for c in self.ordered(capability) {
            let Some(fut) = call(Arc::clone(&c)) else {
                continue;
            };
            attempted_any = true;
            let name = c.name();
            let res = Self::provider_call_with_timeout(
                name,
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            .and_then(|raw| accept(name, raw));
            match res {
                Ok(data) => {
                    return Ok(Sourced {
                        data,
                        provider: c.key(),
                    });
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(connector = name, error = %e, "provider skipped; trying next");
                    errors.push(tag_err(name, e));
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}

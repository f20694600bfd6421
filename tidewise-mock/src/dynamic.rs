use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tidewise_core::connector::{
    PressureForecastProvider, PressureObservationProvider, TidePredictionProvider,
    TidewiseConnector,
};
use tidewise_core::{Capability, RawSeries, TidewiseError, WindowRequest};

/// Instruction for how a capability call should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(TidewiseError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<Capability, MockBehavior<RawSeries>>,
    requests: HashMap<Capability, Vec<WindowRequest>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for calls to one capability.
    pub async fn set_behavior(&self, capability: Capability, behavior: MockBehavior<RawSeries>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(capability, behavior);
    }

    /// Windows requested so far for a capability, in call order.
    pub async fn requests(&self, capability: Capability) -> Vec<WindowRequest> {
        let guard = self.state.lock().await;
        guard.requests.get(&capability).cloned().unwrap_or_default()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Capabilities without a configured behavior answer `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TidewiseConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TidewiseConnector>, controller)
    }

    async fn answer(
        &self,
        capability: Capability,
        req: WindowRequest,
    ) -> Result<RawSeries, TidewiseError> {
        // Snapshot the behavior without holding the lock across the hang
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.entry(capability).or_default().push(req);
            guard.rules.get(&capability).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(raw)) => Ok(raw),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(TidewiseError::unsupported(capability.as_str())),
        }
    }
}

impl TidewiseConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_tide_prediction_provider(&self) -> Option<&dyn TidePredictionProvider> {
        Some(self as &dyn TidePredictionProvider)
    }

    fn as_pressure_observation_provider(&self) -> Option<&dyn PressureObservationProvider> {
        Some(self as &dyn PressureObservationProvider)
    }

    fn as_pressure_forecast_provider(&self) -> Option<&dyn PressureForecastProvider> {
        Some(self as &dyn PressureForecastProvider)
    }
}

#[async_trait]
impl TidePredictionProvider for DynamicMockConnector {
    async fn tide_predictions(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError> {
        self.answer(Capability::TidePredictions, req).await
    }
}

#[async_trait]
impl PressureObservationProvider for DynamicMockConnector {
    async fn pressure_observations(
        &self,
        req: WindowRequest,
    ) -> Result<RawSeries, TidewiseError> {
        self.answer(Capability::PressureObservations, req).await
    }
}

#[async_trait]
impl PressureForecastProvider for DynamicMockConnector {
    async fn pressure_forecast(&self, req: WindowRequest) -> Result<RawSeries, TidewiseError> {
        self.answer(Capability::PressureForecast, req).await
    }
}

//! Shared application state for axum handlers.

use std::sync::Arc;

use wattboard_app::event_bus::InProcessEventBus;
use wattboard_app::services::relay_service::RelayService;
use wattboard_app::services::telemetry_service::TelemetryService;

/// Application state shared across all axum handlers.
///
/// Generic over the sensor feed to avoid dynamic dispatch; the relay gateway
/// lives in the relay service's forwarder task. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`, only the `Arc` wrappers are cloned.
pub struct AppState<F> {
    /// Relay panel use-cases.
    pub relay_service: Arc<RelayService<Arc<InProcessEventBus>>>,
    /// Dashboard snapshot and connectivity use-cases.
    pub telemetry_service: Arc<TelemetryService<F, Arc<InProcessEventBus>>>,
    /// Event bus for SSE subscriptions.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
            telemetry_service: Arc::clone(&self.telemetry_service),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<F> AppState<F> {
    /// Create a new application state from services that are also shared
    /// with the poller task.
    pub fn new(
        relay_service: Arc<RelayService<Arc<InProcessEventBus>>>,
        telemetry_service: Arc<TelemetryService<F, Arc<InProcessEventBus>>>,
        event_bus: Arc<InProcessEventBus>,
    ) -> Self {
        Self {
            relay_service,
            telemetry_service,
            event_bus,
        }
    }
}

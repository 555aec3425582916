//! In-memory dashboard state shared by the services and the HTTP adapter.

use tokio::sync::RwLock;

use wattboard_domain::dashboard::Dashboard;
use wattboard_domain::relay::RelayPanel;

/// Relay panel and dashboard, each behind its own lock.
///
/// Nothing is persisted: a restart starts from an empty dashboard with every
/// relay off.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub relays: RwLock<RelayPanel>,
    pub dashboard: RwLock<Dashboard>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current relay panel.
    pub async fn relays(&self) -> RelayPanel {
        *self.relays.read().await
    }

    /// Copy of the current dashboard.
    pub async fn dashboard(&self) -> Dashboard {
        self.dashboard.read().await.clone()
    }
}

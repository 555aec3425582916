//! Full dashboard snapshot, used by the browser on first load.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use wattboard_app::ports::SensorFeed;
use wattboard_domain::dashboard::Dashboard;
use wattboard_domain::relay::RelayPanel;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub relays: RelayPanel,
    pub dashboard: Dashboard,
}

/// `GET /api/dashboard`
pub async fn get<F>(State(state): State<AppState<F>>) -> Json<DashboardResponse>
where
    F: SensorFeed + Send + Sync + 'static,
{
    let relays = state.relay_service.panel().await;
    let dashboard = state.telemetry_service.snapshot().await;
    Json(DashboardResponse { relays, dashboard })
}

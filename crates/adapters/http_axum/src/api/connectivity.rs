//! Browser online/offline reports.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use wattboard_app::ports::SensorFeed;
use wattboard_domain::status::ConnectionStatus;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConnectivityRequest {
    pub online: bool,
}

/// `PUT /api/connectivity`
pub async fn update<F>(
    State(state): State<AppState<F>>,
    body: Result<Json<ConnectivityRequest>, JsonRejection>,
) -> Result<Json<ConnectionStatus>, ApiError>
where
    F: SensorFeed + Send + Sync + 'static,
{
    let Json(body) = body?;
    Ok(Json(
        state.telemetry_service.set_connectivity(body.online).await,
    ))
}

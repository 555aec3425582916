//! JSON handlers for the relay panel.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::Deserialize;

use wattboard_app::ports::SensorFeed;
use wattboard_domain::relay::{Load, RelayPanel};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for switching a relay.
#[derive(Debug, Deserialize)]
pub struct SwitchRequest {
    pub on: bool,
}

/// `GET /api/relays`
pub async fn list<F>(State(state): State<AppState<F>>) -> Json<RelayPanel>
where
    F: SensorFeed + Send + Sync + 'static,
{
    Json(state.relay_service.panel().await)
}

/// `PUT /api/relays/main`
pub async fn set_main<F>(
    State(state): State<AppState<F>>,
    body: Result<Json<SwitchRequest>, JsonRejection>,
) -> Result<Json<RelayPanel>, ApiError>
where
    F: SensorFeed + Send + Sync + 'static,
{
    let Json(body) = body?;
    Ok(Json(state.relay_service.set_main(body.on).await))
}

/// `PUT /api/relays/:load`
pub async fn set_load<F>(
    State(state): State<AppState<F>>,
    load: Result<Path<String>, PathRejection>,
    body: Result<Json<SwitchRequest>, JsonRejection>,
) -> Result<Json<RelayPanel>, ApiError>
where
    F: SensorFeed + Send + Sync + 'static,
{
    let Path(load) = load?;
    let load: Load = load.parse()?;
    let Json(body) = body?;
    let panel = state.relay_service.set_load(load, body.on).await?;
    Ok(Json(panel))
}

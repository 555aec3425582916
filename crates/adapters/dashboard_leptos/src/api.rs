//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use wattboard_domain::dashboard::Dashboard;
use wattboard_domain::relay::{Load, RelayPanel};
use wattboard_domain::status::ConnectionStatus;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Everything needed to render the page on first load.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub relays: RelayPanel,
    pub dashboard: Dashboard,
}

pub async fn fetch_dashboard() -> Result<Snapshot, ApiError> {
    let resp = check_response(Request::get("/api/dashboard").send().await?).await?;
    Ok(resp.json().await?)
}

async fn put_switch(url: &str, on: bool) -> Result<RelayPanel, ApiError> {
    let body = serde_json::json!({ "on": on });
    let resp = check_response(Request::put(url).json(&body)?.send().await?).await?;
    Ok(resp.json().await?)
}

/// Switch the master relay; the server answers with the whole panel.
pub async fn set_main_relay(on: bool) -> Result<RelayPanel, ApiError> {
    put_switch("/api/relays/main", on).await
}

pub async fn set_load(load: Load, on: bool) -> Result<RelayPanel, ApiError> {
    put_switch(&format!("/api/relays/{}", load.number()), on).await
}

/// Tell the server the browser went online or offline.
pub async fn report_connectivity(online: bool) -> Result<ConnectionStatus, ApiError> {
    let body = serde_json::json!({ "online": online });
    let resp = check_response(Request::put("/api/connectivity").json(&body)?.send().await?).await?;
    Ok(resp.json().await?)
}

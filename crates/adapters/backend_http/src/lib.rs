//! # wattboard-adapter-backend-http
//!
//! Talks to the electricity-monitoring HTTP API over `reqwest`.
//!
//! ## Endpoints
//!
//! | Port | Request | Response |
//! |------|---------|----------|
//! | `RelayGateway::sync_main` | `GET {base}/sync_main_relay.php?relay_status={0,1}` | JSON, logged and ignored |
//! | `RelayGateway::sync_load` | `GET {base}/sync_relay_control.php?relay{n}={0,1}` | JSON, logged and ignored |
//! | `SensorFeed::fetch` | `GET {base}/fetch_sensor_data.php` | Telemetry sample |
//!
//! Any non-success status counts as a failure. No request is retried.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wattboard-app` and `wattboard-domain`.

mod config;
mod error;

pub use config::BackendConfig;
pub use error::BackendError;

use std::future::Future;

use wattboard_app::ports::{RelayGateway, SensorFeed};
use wattboard_domain::error::WattboardError;
use wattboard_domain::relay::Load;
use wattboard_domain::telemetry::TelemetrySample;

/// HTTP client for the monitoring API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Client`] if the TLS backend cannot be set up.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(BackendError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn main_relay_url(&self, on: bool) -> String {
        format!(
            "{}/sync_main_relay.php?relay_status={}",
            self.base_url,
            u8::from(on)
        )
    }

    #[must_use]
    pub fn load_url(&self, load: Load, on: bool) -> String {
        format!(
            "{}/sync_relay_control.php?relay{}={}",
            self.base_url,
            load.number(),
            u8::from(on)
        )
    }

    #[must_use]
    pub fn sensor_url(&self) -> String {
        format!("{}/fetch_sensor_data.php", self.base_url)
    }

    async fn get(client: &reqwest::Client, url: &str) -> Result<reqwest::Response, BackendError> {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|source| BackendError::Request {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn sync(client: reqwest::Client, url: String) -> Result<(), WattboardError> {
        let body: serde_json::Value = Self::get(&client, &url)
            .await?
            .json()
            .await
            .map_err(|source| BackendError::Decode {
                url: url.clone(),
                source,
            })?;
        tracing::debug!(%url, response = %body, "relay synced");
        Ok(())
    }
}

impl RelayGateway for HttpBackend {
    fn sync_main(&self, on: bool) -> impl Future<Output = Result<(), WattboardError>> + Send {
        Self::sync(self.client.clone(), self.main_relay_url(on))
    }

    fn sync_load(
        &self,
        load: Load,
        on: bool,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send {
        Self::sync(self.client.clone(), self.load_url(load, on))
    }
}

impl SensorFeed for HttpBackend {
    fn fetch(&self) -> impl Future<Output = Result<TelemetrySample, WattboardError>> + Send {
        let client = self.client.clone();
        let url = self.sensor_url();
        async move {
            let sample = Self::get(&client, &url)
                .await?
                .json::<TelemetrySample>()
                .await
                .map_err(|source| BackendError::Decode {
                    url: url.clone(),
                    source,
                })?;
            Ok(sample)
        }
    }
}

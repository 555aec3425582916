//! # wattboardd — wattboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Pick the telemetry source: the monitoring backend or the simulation
//! - Construct application services, injecting adapters via port traits
//! - Run the sensor poller in the background
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use wattboard_adapter_backend_http::HttpBackend;
use wattboard_adapter_http_axum::router;
use wattboard_adapter_http_axum::state::AppState;
use wattboard_adapter_simulated::{SimulatedMeter, SimulatedRelayBoard};
use wattboard_app::event_bus::InProcessEventBus;
use wattboard_app::poller;
use wattboard_app::ports::{RelayGateway, SensorFeed};
use wattboard_app::services::relay_service::RelayService;
use wattboard_app::services::telemetry_service::TelemetryService;
use wattboard_app::state::DashboardState;

use crate::config::{Config, Source};

/// How long open connections (SSE streams mostly) get to close on shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.telemetry.source {
        Source::Backend => {
            tracing::info!(url = %config.backend.base_url, "using monitoring backend");
            let backend = HttpBackend::new(&config.backend)?;
            serve(&config, backend.clone(), backend).await
        }
        Source::Simulated => {
            tracing::info!("using simulated meter and relay board");
            serve(
                &config,
                SimulatedRelayBoard::default(),
                SimulatedMeter::default(),
            )
            .await
        }
    }
}

async fn serve<G, F>(config: &Config, gateway: G, feed: F) -> Result<(), Box<dyn std::error::Error>>
where
    G: RelayGateway + Send + Sync + 'static,
    F: SensorFeed + Send + Sync + 'static,
{
    // Services
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let shared = Arc::new(DashboardState::new());
    let relay_service = Arc::new(RelayService::new(
        gateway,
        Arc::clone(&event_bus),
        Arc::clone(&shared),
    ));
    let telemetry_service = Arc::new(TelemetryService::new(
        feed,
        Arc::clone(&event_bus),
        shared,
    ));

    // Poller
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(poller::run(
        Arc::clone(&telemetry_service),
        config.poll_interval(),
        shutdown_rx.clone(),
    ));

    // HTTP
    let state = AppState::new(relay_service, telemetry_service, event_bus);
    let app = router::build(state, config.dashboard.assets_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "wattboardd listening");

    let mut server_shutdown = shutdown_rx;
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = server_shutdown.wait_for(|stop| *stop).await;
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("shutting down");
    let _ = shutdown_tx.send(true);

    poller.await?;
    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!("open connections did not close in time"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

//! # wattboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RelayGateway` — forward relay changes to the monitoring backend
//!   - `SensorFeed` — fetch one telemetry sample
//!   - `EventPublisher` — fan dashboard events out to live views
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RelayService` — switch the master relay and the loads
//!   - `TelemetryService` — poll once, record success or failure
//!   - `poller::run` — the fixed-interval polling loop
//! - Hold the in-memory **dashboard state** shared by both services
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `wattboard-domain` only (plus `tokio::sync`/`tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod poller;
pub mod ports;
pub mod services;
pub mod state;

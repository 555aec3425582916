//! # wattboard-adapter-simulated
//!
//! Simulated integration that stands in for the monitoring backend, for
//! demos and tests.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | Simulated meter | `SensorFeed` | Random-walk voltage, current, frequency and power factor around a 225 V / 3.2 A household load |
//! | Simulated relay board | `RelayGateway` | Accepts every command and remembers the last state it was told |
//!
//! ## Dependency rule
//!
//! Depends on `wattboard-app` (port traits) and `wattboard-domain` only.

mod devices;

pub use devices::{BoardState, SimulatedMeter, SimulatedRelayBoard};

//! # wattboard-domain
//!
//! Pure domain model for the wattboard electricity monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps and clock labels
//! - Define the **relay panel** (one master relay gating four loads)
//! - Define the **telemetry sample** fetched from the sensor endpoint
//! - Define the bounded **chart series** and **readings table**
//! - Define the **connection status** shown on the dashboard badge
//! - Define the **dashboard** aggregate and the **events** it emits
//! - Contain all invariant enforcement (master-disables-loads, capacity caps)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod dashboard;
pub mod event;
pub mod readings;
pub mod relay;
pub mod series;
pub mod status;
pub mod telemetry;

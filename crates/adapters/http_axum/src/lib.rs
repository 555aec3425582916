//! # wattboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the browser dashboard
//!   (`/api/dashboard`, `/api/relays`, `/api/connectivity`, …)
//! - Push **live updates** over Server-Sent Events (`/api/events/stream`)
//! - Serve the compiled dashboard assets for every other path
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `wattboard-app` (for port traits and services) and
//! `wattboard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WattboardError`] at port boundaries.

use crate::relay::Load;

/// Base error for every fallible operation crossing a port.
#[derive(Debug, thiserror::Error)]
pub enum WattboardError {
    /// A command was rejected by a domain rule.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The electricity-monitoring backend could not be reached or answered badly.
    #[error("backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Loads are disabled while the master relay is off.
    #[error("load {} is disabled while the main relay is off", .0.number())]
    LoadDisabled(Load),

    /// Only loads 1 to 4 exist.
    #[error("unknown load {0}, expected 1 to 4")]
    UnknownLoad(String),
}

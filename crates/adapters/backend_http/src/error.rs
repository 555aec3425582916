//! Backend adapter error types.

use wattboard_domain::error::WattboardError;

/// Errors talking to the electricity-monitoring API.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON.
    #[error("invalid response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<BackendError> for WattboardError {
    fn from(err: BackendError) -> Self {
        WattboardError::Backend(Box::new(err))
    }
}

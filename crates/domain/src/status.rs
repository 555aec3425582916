//! Connection status shown on the dashboard badge.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Online,
    /// The browser reported it lost its network connection.
    Offline,
    /// The last sensor poll failed.
    ConnectionError,
}

impl ConnectionStatus {
    /// Badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "ONLINE \u{b7} connected to server",
            Self::Offline => "OFFLINE \u{b7} check connection",
            Self::ConnectionError => "CONNECTION ERROR",
        }
    }

    #[must_use]
    pub fn is_healthy(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

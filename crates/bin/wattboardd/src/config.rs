//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wattboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use wattboard_adapter_backend_http::BackendConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Where samples come from and how often.
    pub telemetry: TelemetryConfig,
    /// Electricity-monitoring API settings.
    pub backend: BackendConfig,
    /// Browser dashboard settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Which adapters feed the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The electricity-monitoring HTTP API.
    #[default]
    Backend,
    /// Random-walk meter and an in-memory relay board.
    Simulated,
}

impl FromStr for Source {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "backend" => Ok(Self::Backend),
            "simulated" => Ok(Self::Simulated),
            other => Err(ConfigError::Validation(format!(
                "unknown source {other:?}, expected \"backend\" or \"simulated\""
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub source: Source,
    /// Delay between two sensor polls, in milliseconds.
    pub poll_interval_ms: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the compiled dashboard (`index.html` + WASM).
    /// When unset only the API is served.
    pub assets_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `wattboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wattboard.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(val) = var("WATTBOARD_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("WATTBOARD_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("WATTBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("WATTBOARD_SOURCE") {
            self.telemetry.source = val.parse()?;
        }
        if let Some(ms) = var("WATTBOARD_POLL_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.telemetry.poll_interval_ms = ms;
        }
        if let Some(val) = var("WATTBOARD_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Some(val) = var("WATTBOARD_ASSETS_DIR") {
            self.dashboard.assets_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = var("WATTBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.telemetry.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "backend URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry.poll_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            source: Source::default(),
            poll_interval_ms: 2000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wattboardd=info,wattboard=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.source, Source::Backend);
        assert_eq!(config.poll_interval(), Duration::from_secs(2));
        assert_eq!(
            config.backend.base_url,
            "http://localhost/electricity_monitoring/api"
        );
        assert!(config.dashboard.assets_dir.is_none());
        assert_eq!(
            config.logging.filter,
            "wattboardd=info,wattboard=info,tower_http=debug"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [telemetry]
            source = 'simulated'
            poll_interval_ms = 500

            [backend]
            base_url = 'http://meter.lan/api'
            timeout_secs = 3

            [dashboard]
            assets_dir = 'dist'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.telemetry.source, Source::Simulated);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.backend.base_url, "http://meter.lan/api");
        assert_eq!(config.backend.timeout_secs, 3);
        assert_eq!(config.dashboard.assets_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [telemetry]
            poll_interval_ms = 1000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.telemetry.source, Source::Backend);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_source_in_toml() {
        let result: Result<Config, _> = toml::from_str("[telemetry]\nsource = 'mqtt'");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("WATTBOARD_BIND", "127.0.0.1:8081"),
                ("WATTBOARD_SOURCE", "simulated"),
                ("WATTBOARD_POLL_INTERVAL_MS", "750"),
                ("WATTBOARD_BACKEND_URL", "http://meter.lan/api"),
                ("WATTBOARD_ASSETS_DIR", "/srv/wattboard"),
                ("WATTBOARD_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.telemetry.source, Source::Simulated);
        assert_eq!(config.poll_interval(), Duration::from_millis(750));
        assert_eq!(config.backend.base_url, "http://meter.lan/api");
        assert_eq!(
            config.dashboard.assets_dir,
            Some(PathBuf::from("/srv/wattboard"))
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_prefer_rust_log_over_wattboard_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("WATTBOARD_LOG", "debug"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("WATTBOARD_PORT", "http")]))
            .unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_unknown_source_in_env() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("WATTBOARD_SOURCE", "mqtt")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.telemetry.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_backend_url() {
        let mut config = Config::default();
        config.backend.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}

//! Where telemetry samples come from.

use std::future::Future;

use wattboard_domain::error::WattboardError;
use wattboard_domain::telemetry::TelemetrySample;

/// Source of electrical measurements.
pub trait SensorFeed {
    /// Fetch the latest sample.
    fn fetch(&self) -> impl Future<Output = Result<TelemetrySample, WattboardError>> + Send;
}

impl<T: SensorFeed + Send + Sync> SensorFeed for std::sync::Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<TelemetrySample, WattboardError>> + Send {
        (**self).fetch()
    }
}

//! Fixed-interval polling loop driving [`TelemetryService::poll_once`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};

use crate::ports::{EventPublisher, SensorFeed};
use crate::services::telemetry_service::{PollOutcome, TelemetryService};

/// Interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Poll `service` every `period` until `shutdown` turns `true` (or its
/// sender is dropped).
///
/// The first poll happens immediately. Failures never stop the loop and are
/// not retried early; the next attempt waits for the next tick. Polls run one
/// after another, so a slow response delays the next tick instead of
/// overlapping it.
pub async fn run<F, P>(
    service: Arc<TelemetryService<F, P>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    F: SensorFeed + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::info!(period_ms = period.as_millis(), "telemetry poller started");

    let mut failures: u64 = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match service.poll_once().await {
                    PollOutcome::Recorded(_) => failures = 0,
                    PollOutcome::Failed => failures += 1,
                }
                if failures > 0 && failures % 30 == 0 {
                    tracing::error!(failures, "sensor endpoint keeps failing");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::info!("telemetry poller stopped");
}

//! Records one sensor poll at a time into the shared dashboard.

use std::error::Error as _;
use std::sync::Arc;

use wattboard_domain::dashboard::Dashboard;
use wattboard_domain::error::WattboardError;
use wattboard_domain::event::DashboardEvent;
use wattboard_domain::readings::ReadingRow;
use wattboard_domain::status::ConnectionStatus;
use wattboard_domain::time::now;

use crate::ports::{EventPublisher, SensorFeed};
use crate::state::DashboardState;

/// Result of a single poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The sample was recorded; carries the new table row.
    Recorded(ReadingRow),
    /// The fetch failed; only the status badge changed.
    Failed,
}

/// Application service that fetches samples and records them into the
/// shared dashboard.
pub struct TelemetryService<F, P> {
    feed: F,
    publisher: P,
    state: Arc<DashboardState>,
}

impl<F, P> TelemetryService<F, P>
where
    F: SensorFeed + Send + Sync,
    P: EventPublisher + Send + Sync,
{
    /// Create a new service over the shared dashboard state.
    pub fn new(feed: F, publisher: P, state: Arc<DashboardState>) -> Self {
        Self {
            feed,
            publisher,
            state,
        }
    }

    /// Fetch one sample and apply it.
    ///
    /// On success the stat cards, all three charts and the table are updated
    /// exactly once, using the relay states at the time the sample arrived.
    /// On failure the error is logged and the status badge switches to the
    /// error state; charts and table are left alone. Nothing is retried.
    pub async fn poll_once(&self) -> PollOutcome {
        match self.feed.fetch().await {
            Ok(sample) => {
                let at = now();
                let relays = self.state.relays().await;
                let (row, was_healthy) = {
                    let mut dashboard = self.state.dashboard.write().await;
                    let was_healthy = dashboard.status.is_healthy();
                    (dashboard.record_sample(&sample, &relays, at), was_healthy)
                };
                if !was_healthy {
                    tracing::info!("sensor endpoint reachable again");
                }
                tracing::debug!(
                    voltage = sample.voltage,
                    current = sample.current,
                    power = sample.power,
                    frequency = sample.frequency,
                    "sample recorded"
                );

                self.announce(DashboardEvent::SampleRecorded {
                    sample,
                    at,
                    row: row.clone(),
                })
                .await;
                PollOutcome::Recorded(row)
            }
            Err(err) => {
                tracing::warn!(error = ?err, "sensor poll failed");
                self.state.dashboard.write().await.record_failure();

                self.announce(DashboardEvent::PollFailed {
                    message: describe(&err),
                })
                .await;
                self.announce(DashboardEvent::StatusChanged {
                    status: ConnectionStatus::ConnectionError,
                })
                .await;
                PollOutcome::Failed
            }
        }
    }

    /// Copy of the current dashboard.
    pub async fn snapshot(&self) -> Dashboard {
        self.state.dashboard().await
    }

    /// Record a browser connectivity change.
    pub async fn set_connectivity(&self, online: bool) -> ConnectionStatus {
        let status = {
            let mut dashboard = self.state.dashboard.write().await;
            dashboard.set_connectivity(online);
            dashboard.status
        };
        tracing::info!(%status, "connectivity changed");

        self.announce(DashboardEvent::StatusChanged { status }).await;
        status
    }

    async fn announce(&self, event: DashboardEvent) {
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = ?err, "failed to publish dashboard event");
        }
    }
}

/// Flatten an error and its sources into one line.
fn describe(err: &WattboardError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

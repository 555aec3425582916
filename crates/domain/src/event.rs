//! Dashboard events — what changed, pushed to every open dashboard.

use serde::{Deserialize, Serialize};

use crate::readings::ReadingRow;
use crate::relay::RelayPanel;
use crate::status::ConnectionStatus;
use crate::telemetry::TelemetrySample;
use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The master relay or a load was switched.
    RelaysChanged { relays: RelayPanel },
    /// A poll succeeded; one point per chart and one table row were added.
    SampleRecorded {
        sample: TelemetrySample,
        at: Timestamp,
        row: ReadingRow,
    },
    /// A poll failed.
    PollFailed { message: String },
    StatusChanged { status: ConnectionStatus },
}

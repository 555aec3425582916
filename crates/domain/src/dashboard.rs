//! Dashboard — everything the live view renders, updated one sample at a time.

use serde::{Deserialize, Serialize};

use crate::event::DashboardEvent;
use crate::readings::{ReadingRow, ReadingsTable};
use crate::relay::RelayPanel;
use crate::series::{ChartSeries, Metric};
use crate::status::ConnectionStatus;
use crate::telemetry::TelemetrySample;
use crate::time::Timestamp;

/// Latest values shown on the four stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveStats {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub frequency: f64,
}

impl From<&TelemetrySample> for LiveStats {
    fn from(sample: &TelemetrySample) -> Self {
        Self {
            voltage: sample.voltage,
            current: sample.current,
            power: sample.power,
            frequency: sample.frequency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub live: Option<LiveStats>,
    pub voltage: ChartSeries,
    pub current: ChartSeries,
    pub power: ChartSeries,
    pub table: ReadingsTable,
    pub status: ConnectionStatus,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            live: None,
            voltage: ChartSeries::new(Metric::Voltage),
            current: ChartSeries::new(Metric::Current),
            power: ChartSeries::new(Metric::Power),
            table: ReadingsTable::default(),
            status: ConnectionStatus::default(),
        }
    }
}

impl Dashboard {
    /// Series for the given metric.
    #[must_use]
    pub fn series(&self, metric: Metric) -> &ChartSeries {
        match metric {
            Metric::Voltage => &self.voltage,
            Metric::Current => &self.current,
            Metric::Power => &self.power,
        }
    }

    /// Apply a successful poll.
    ///
    /// Updates the stat cards, appends one point to each chart, prepends one
    /// table row carrying the current relay states, and marks the connection
    /// online. Returns the new row.
    pub fn record_sample(
        &mut self,
        sample: &TelemetrySample,
        relays: &RelayPanel,
        at: Timestamp,
    ) -> ReadingRow {
        let row = ReadingRow::new(self.table.next_serial(), sample, relays, &at);
        self.apply_recorded(sample, at, row.clone());
        row
    }

    /// Apply a sample whose table row was already built elsewhere (a
    /// dashboard mirroring the server's state).
    pub fn apply_recorded(&mut self, sample: &TelemetrySample, at: Timestamp, row: ReadingRow) {
        self.live = Some(LiveStats::from(sample));

        self.voltage.push(at, sample.voltage);
        self.current.push(at, sample.current);
        self.power.push(at, sample.power);

        self.table.prepend(row);

        self.status = ConnectionStatus::Online;
    }

    /// Replay an event emitted by another dashboard. Relay changes are not
    /// part of the dashboard and are ignored, as are samples no newer than the
    /// latest plotted point (already part of a snapshot).
    pub fn apply_event(&mut self, event: &DashboardEvent) {
        match event {
            DashboardEvent::SampleRecorded { sample, at, row } => {
                if self.voltage.latest().is_none_or(|latest| latest.at < *at) {
                    self.apply_recorded(sample, *at, row.clone());
                }
            }
            DashboardEvent::PollFailed { .. } => self.record_failure(),
            DashboardEvent::StatusChanged { status } => self.status = *status,
            DashboardEvent::RelaysChanged { .. } => {}
        }
    }

    /// Apply a failed poll: only the status badge changes.
    pub fn record_failure(&mut self) {
        self.status = ConnectionStatus::ConnectionError;
    }

    /// Apply a browser connectivity change.
    pub fn set_connectivity(&mut self, online: bool) {
        self.status = if online {
            ConnectionStatus::Online
        } else {
            ConnectionStatus::Offline
        };
    }
}

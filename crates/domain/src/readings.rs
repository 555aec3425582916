//! The most recent samples, newest first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::relay::{RelayPanel, on_off};
use crate::telemetry::TelemetrySample;
use crate::time::{Timestamp, table_label};

/// Maximum number of rows kept in the table.
pub const TABLE_CAPACITY: usize = 8;

/// Column headers, in the order [`ReadingRow::cells`] renders them.
pub const COLUMNS: [&str; 13] = [
    "#", "Time", "Voltage", "Power", "Current", "Frequency", "PF", "Energy", "Main", "Load 1",
    "Load 2", "Load 3", "Load 4",
];

/// One table row: a sample plus the relay states at the time it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRow {
    pub serial: usize,
    pub recorded_label: String,
    pub voltage: f64,
    pub power: f64,
    pub current: f64,
    pub frequency: f64,
    pub power_factor: f64,
    pub energy: f64,
    pub main: bool,
    pub loads: [bool; 4],
}

impl ReadingRow {
    /// Build a row, resolving the sample's optional fields to their defaults.
    #[must_use]
    pub fn new(
        serial: usize,
        sample: &TelemetrySample,
        relays: &RelayPanel,
        recorded_at: &Timestamp,
    ) -> Self {
        Self {
            serial,
            recorded_label: table_label(recorded_at),
            voltage: sample.voltage,
            power: sample.power,
            current: sample.current,
            frequency: sample.frequency,
            power_factor: sample.power_factor_or_default(),
            energy: sample.energy_or_default(),
            main: relays.main(),
            loads: relays.loads(),
        }
    }

    /// Display text for each column of [`COLUMNS`].
    #[must_use]
    pub fn cells(&self) -> [String; 13] {
        [
            self.serial.to_string(),
            self.recorded_label.clone(),
            format!("{} V", self.voltage),
            format!("{} W", self.power),
            format!("{} A", self.current),
            format!("{} Hz", self.frequency),
            format!("{:.2}", self.power_factor),
            format!("{:.2} kWh", self.energy),
            on_off(self.main).to_string(),
            on_off(self.loads[0]).to_string(),
            on_off(self.loads[1]).to_string(),
            on_off(self.loads[2]).to_string(),
            on_off(self.loads[3]).to_string(),
        ]
    }
}

/// Bounded table of rows, newest at the top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReadingsTableRepr")]
pub struct ReadingsTable {
    rows: VecDeque<ReadingRow>,
}

impl ReadingsTable {
    /// Serial number the next row receives: rows currently shown, plus one.
    #[must_use]
    pub fn next_serial(&self) -> usize {
        self.rows.len() + 1
    }

    /// Insert `row` at the top, dropping rows from the bottom while the table
    /// holds more than [`TABLE_CAPACITY`].
    pub fn prepend(&mut self, row: ReadingRow) {
        self.rows.push_front(row);
        self.rows.truncate(TABLE_CAPACITY);
    }

    /// Rows from newest to oldest.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &ReadingRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Wire shape of [`ReadingsTable`]; decoding drops rows past
/// [`TABLE_CAPACITY`] from the bottom.
#[derive(Deserialize)]
struct ReadingsTableRepr {
    rows: VecDeque<ReadingRow>,
}

impl From<ReadingsTableRepr> for ReadingsTable {
    fn from(mut repr: ReadingsTableRepr) -> Self {
        repr.rows.truncate(TABLE_CAPACITY);
        Self { rows: repr.rows }
    }
}

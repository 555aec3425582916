//! Telemetry sample — one reading of electrical measurements.

use serde::{Deserialize, Deserializer, Serialize};

/// Power factor shown when the sensor does not report one.
pub const DEFAULT_POWER_FACTOR: f64 = 0.95;

/// Energy shown when the sensor does not report a meter reading.
pub const DEFAULT_ENERGY_KWH: f64 = 0.0;

/// One reading fetched from the sensor endpoint.
///
/// Numeric fields accept either JSON numbers or numeric strings, since the
/// monitoring backend returns database columns as text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Line voltage in volts.
    #[serde(deserialize_with = "number")]
    pub voltage: f64,
    /// Current draw in amperes.
    #[serde(deserialize_with = "number")]
    pub current: f64,
    /// Active power in watts.
    #[serde(deserialize_with = "number")]
    pub power: f64,
    /// Grid frequency in hertz.
    #[serde(deserialize_with = "number")]
    pub frequency: f64,
    #[serde(default, deserialize_with = "optional_number")]
    pub power_factor: Option<f64>,
    /// Cumulative energy in kWh.
    #[serde(default, deserialize_with = "optional_number")]
    pub energy: Option<f64>,
}

impl TelemetrySample {
    #[must_use]
    pub fn power_factor_or_default(&self) -> f64 {
        self.power_factor.unwrap_or(DEFAULT_POWER_FACTOR)
    }

    #[must_use]
    pub fn energy_or_default(&self) -> f64 {
        self.energy.unwrap_or(DEFAULT_ENERGY_KWH)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected a number, got {text:?}"))),
        }
    }
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    NumberOrText::deserialize(deserializer)?.into_f64()
}

/// `null`, a missing field and an empty string all mean "not reported".
fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_f64().map(Some),
    }
}

//! Simulated energy meter: a bounded random walk.

use std::future::Future;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wattboard_app::ports::SensorFeed;
use wattboard_domain::error::WattboardError;
use wattboard_domain::telemetry::TelemetrySample;

const VOLTAGE_RANGE: (f64, f64) = (200.0, 250.0);
const CURRENT_RANGE: (f64, f64) = (1.2, 6.5);
const FREQUENCY_RANGE: (f64, f64) = (49.6, 50.3);
const POWER_FACTOR_RANGE: (f64, f64) = (0.85, 0.99);
const BASE_ENERGY_KWH: f64 = 12.45;

/// Walk state carried between readings.
struct Walk {
    rng: StdRng,
    voltage: f64,
    current: f64,
    frequency: f64,
    power_factor: f64,
}

/// A meter whose readings drift a little on every fetch and never leave a
/// plausible household range.
pub struct SimulatedMeter {
    walk: Mutex<Walk>,
}

impl Default for SimulatedMeter {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl SimulatedMeter {
    /// A meter producing the same readings for the same seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            walk: Mutex::new(Walk {
                rng,
                voltage: 225.0,
                current: 3.2,
                frequency: 50.0,
                power_factor: 0.94,
            }),
        }
    }

    /// Advance the walk and return the new reading.
    pub fn next_sample(&self) -> TelemetrySample {
        let mut walk = self
            .walk
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let Walk {
            rng,
            voltage,
            current,
            frequency,
            power_factor,
        } = &mut *walk;

        *voltage = clamp(*voltage + rng.gen_range(-1.0..1.0), VOLTAGE_RANGE);
        *current = clamp(*current + rng.gen_range(-0.1..0.1), CURRENT_RANGE);
        *frequency = clamp(*frequency + rng.gen_range(-0.05..0.05), FREQUENCY_RANGE);
        *power_factor = clamp(*power_factor + rng.gen_range(-0.01..0.01), POWER_FACTOR_RANGE);
        let power = *voltage * *current * rng.gen_range(0.92..0.98);
        let energy = BASE_ENERGY_KWH + rng.gen_range(0.0..0.5);

        TelemetrySample {
            voltage: round_to(*voltage, 1),
            current: round_to(*current, 2),
            power: round_to(power, 0),
            frequency: round_to(*frequency, 1),
            power_factor: Some(round_to(*power_factor, 2)),
            energy: Some(round_to(energy, 2)),
        }
    }
}

impl SensorFeed for SimulatedMeter {
    fn fetch(&self) -> impl Future<Output = Result<TelemetrySample, WattboardError>> + Send {
        let sample = self.next_sample();
        async move { Ok(sample) }
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

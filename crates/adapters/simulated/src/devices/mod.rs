//! Simulated device implementations — meter and relay board.

mod meter;
mod relay_board;

pub use meter::SimulatedMeter;
pub use relay_board::{BoardState, SimulatedRelayBoard};

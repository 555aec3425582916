//! Simulated relay board. Obeys every command.

use std::future::Future;
use std::sync::Mutex;

use wattboard_app::ports::RelayGateway;
use wattboard_domain::error::WattboardError;
use wattboard_domain::relay::Load;

/// Last state each relay was told to take. The board does not enforce the
/// master rule itself; that is the panel's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardState {
    pub main: bool,
    pub loads: [bool; 4],
}

#[derive(Default)]
pub struct SimulatedRelayBoard {
    state: Mutex<BoardState>,
}

impl SimulatedRelayBoard {
    #[must_use]
    pub fn state(&self) -> BoardState {
        *self.lock_state()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BoardState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RelayGateway for SimulatedRelayBoard {
    fn sync_main(&self, on: bool) -> impl Future<Output = Result<(), WattboardError>> + Send {
        self.lock_state().main = on;
        tracing::debug!(on, "simulated main relay switched");
        async { Ok(()) }
    }

    fn sync_load(
        &self,
        load: Load,
        on: bool,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send {
        self.lock_state().loads[usize::from(load.number() - 1)] = on;
        tracing::debug!(load = load.number(), on, "simulated load switched");
        async { Ok(()) }
    }
}

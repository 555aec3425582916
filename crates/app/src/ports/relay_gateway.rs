//! Where relay changes are sent.

use std::future::Future;

use wattboard_domain::error::WattboardError;
use wattboard_domain::relay::Load;

/// Forwards relay changes to whatever drives the physical relays.
///
/// Calls are notifications: callers do not wait for the relays to settle and
/// do not reconcile local state with the outcome.
pub trait RelayGateway {
    /// Report the new state of the master relay.
    fn sync_main(&self, on: bool) -> impl Future<Output = Result<(), WattboardError>> + Send;

    /// Report the new state of one load.
    fn sync_load(
        &self,
        load: Load,
        on: bool,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send;
}

impl<T: RelayGateway + Send + Sync> RelayGateway for std::sync::Arc<T> {
    fn sync_main(&self, on: bool) -> impl Future<Output = Result<(), WattboardError>> + Send {
        (**self).sync_main(on)
    }

    fn sync_load(
        &self,
        load: Load,
        on: bool,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send {
        (**self).sync_load(load, on)
    }
}

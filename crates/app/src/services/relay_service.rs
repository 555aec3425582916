//! Switching the master relay and the loads.

use std::sync::Arc;

use tokio::sync::mpsc;
use wattboard_domain::error::WattboardError;
use wattboard_domain::event::DashboardEvent;
use wattboard_domain::relay::{Load, RelayPanel};

use crate::ports::{EventPublisher, RelayGateway};
use crate::state::DashboardState;

/// A relay change waiting to be forwarded to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelayCommand {
    Main(bool),
    Load(Load, bool),
}

/// Application service for relay control.
///
/// Every change is applied locally first and announced to live views. It is
/// then queued for a background task that forwards commands to the gateway
/// one at a time, in the order they were applied. Callers never wait for the
/// gateway. Gateway failures are logged and swallowed: the local state stays
/// as the user set it.
pub struct RelayService<P> {
    commands: mpsc::UnboundedSender<RelayCommand>,
    publisher: P,
    state: Arc<DashboardState>,
}

impl<P> RelayService<P>
where
    P: EventPublisher + Send + Sync,
{
    /// Create a new service over the shared dashboard state.
    ///
    /// Spawns the task forwarding commands to `gateway`, so it must be called
    /// from within a tokio runtime. The task ends once the service is dropped.
    pub fn new<G>(gateway: G, publisher: P, state: Arc<DashboardState>) -> Self
    where
        G: RelayGateway + Send + Sync + 'static,
    {
        let (commands, outbox) = mpsc::unbounded_channel();
        tokio::spawn(forward(gateway, outbox));
        Self {
            commands,
            publisher,
            state,
        }
    }

    /// Current relay panel.
    pub async fn panel(&self) -> RelayPanel {
        self.state.relays().await
    }

    /// Switch the master relay. Turning it off unchecks and disables every load.
    pub async fn set_main(&self, on: bool) -> RelayPanel {
        let mut relays = self.state.relays.write().await;
        relays.set_main(on);
        let panel = *relays;
        tracing::info!(on, "main relay toggled");

        // announced and queued under the lock so both follow the state order
        self.announce(panel).await;
        self.enqueue(RelayCommand::Main(on));
        drop(relays);
        panel
    }

    /// Switch a single load.
    ///
    /// # Errors
    ///
    /// Returns [`WattboardError::Validation`] while the master relay is off.
    /// Gateway failures are not errors.
    pub async fn set_load(&self, load: Load, on: bool) -> Result<RelayPanel, WattboardError> {
        let mut relays = self.state.relays.write().await;
        relays.set_load(load, on)?;
        let panel = *relays;
        tracing::info!(load = load.number(), on, "load toggled");

        self.announce(panel).await;
        self.enqueue(RelayCommand::Load(load, on));
        drop(relays);
        Ok(panel)
    }

    async fn announce(&self, relays: RelayPanel) {
        if let Err(err) = self
            .publisher
            .publish(DashboardEvent::RelaysChanged { relays })
            .await
        {
            tracing::warn!(error = ?err, "failed to publish relay change");
        }
    }

    fn enqueue(&self, command: RelayCommand) {
        if self.commands.send(command).is_err() {
            tracing::warn!(?command, "relay forwarder stopped, command dropped");
        }
    }
}

/// Forward queued commands to the gateway until every sender is dropped.
async fn forward<G>(gateway: G, mut outbox: mpsc::UnboundedReceiver<RelayCommand>)
where
    G: RelayGateway + Send + Sync,
{
    while let Some(command) = outbox.recv().await {
        let result = match command {
            RelayCommand::Main(on) => gateway.sync_main(on).await,
            RelayCommand::Load(load, on) => gateway.sync_load(load, on).await,
        };
        if let Err(err) = result {
            tracing::warn!(error = ?err, ?command, "failed to sync relay");
        }
    }
    tracing::debug!("relay forwarder stopped");
}

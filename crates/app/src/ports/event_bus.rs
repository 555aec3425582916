//! Event bus port — publish dashboard events to live views.

use std::future::Future;

use wattboard_domain::error::WattboardError;
use wattboard_domain::event::DashboardEvent;

/// Publishes dashboard events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(
        &self,
        event: DashboardEvent,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: DashboardEvent,
    ) -> impl Future<Output = Result<(), WattboardError>> + Send {
        (**self).publish(event)
    }
}

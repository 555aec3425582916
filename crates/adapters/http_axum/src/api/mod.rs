//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod connectivity;
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod relays;
pub mod sse;

use axum::Router;
use axum::routing::{get, put};

use wattboard_app::ports::SensorFeed;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<F>() -> Router<AppState<F>>
where
    F: SensorFeed + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(dashboard::get::<F>))
        // Relays
        .route("/relays", get(relays::list::<F>))
        .route("/relays/main", put(relays::set_main::<F>))
        .route("/relays/{load}", put(relays::set_load::<F>))
        // Browser connectivity
        .route("/connectivity", put(connectivity::update::<F>))
        // Live updates
        .route("/events/stream", get(sse::stream::<F>))
}

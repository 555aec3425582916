//! Connection status badge.

use leptos::prelude::*;
use wattboard_domain::status::ConnectionStatus;

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<ConnectionStatus>) -> impl IntoView {
    let class = move || match status.get() {
        ConnectionStatus::Online => "status-badge status-online",
        ConnectionStatus::Offline => "status-badge status-offline",
        ConnectionStatus::ConnectionError => "status-badge status-error",
    };

    view! { <span class=class>{move || status.get().label()}</span> }
}

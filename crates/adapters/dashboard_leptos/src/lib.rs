//! # wattboard-dashboard-leptos
//!
//! Browser dashboard, rendered client-side. Loads the current state from
//! `/api/dashboard`, then follows `/api/events/stream`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wattboard_domain::dashboard::Dashboard;
use wattboard_domain::event::DashboardEvent;
use wattboard_domain::relay::RelayPanel;
use wattboard_domain::series::Metric;

pub mod api;
mod components;
mod connectivity;
pub mod sse;

use components::{
    MetricChart, ReadingsTable, RelayControls, StatCard, StatusBadge, ToastContainer, use_toasts,
};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <main>
                <Home/>
            </main>
        </ToastContainer>
    }
}

#[component]
fn Home() -> impl IntoView {
    let toasts = use_toasts();
    let relays = RwSignal::new(RelayPanel::default());
    let dashboard = RwSignal::new(Dashboard::default());

    let apply = move |event: DashboardEvent| match event {
        DashboardEvent::RelaysChanged { relays: panel } => relays.set(panel),
        other => dashboard.update(|d| d.apply_event(&other)),
    };

    // Subscribe before fetching the snapshot; events are held back until it
    // lands, then replayed on top of it.
    let pending = StoredValue::new_local(Some(Vec::<DashboardEvent>::new()));
    let (event, connection) = sse::use_dashboard_events();
    StoredValue::new_local(connection);
    Effect::new(move |_| {
        let Some(event) = event.get() else {
            return;
        };
        let mut event = Some(event);
        pending.update_value(|held| {
            if let Some(held) = held {
                held.extend(event.take());
            }
        });
        if let Some(event) = event {
            apply(event);
        }
    });

    spawn_local(async move {
        match api::fetch_dashboard().await {
            Ok(snapshot) => {
                relays.set(snapshot.relays);
                dashboard.set(snapshot.dashboard);
            }
            Err(err) => toasts.push(format!("Failed to load dashboard: {err}")),
        }
        let held = pending
            .try_update_value(Option::take)
            .flatten()
            .unwrap_or_default();
        for event in held {
            apply(event);
        }
    });

    connectivity::watch_connectivity(move |online| {
        dashboard.update(|d| d.set_connectivity(online));
        spawn_local(async move {
            if let Err(err) = api::report_connectivity(online).await {
                leptos::logging::warn!("failed to report connectivity: {err}");
            }
        });
    });

    let live = move |pick: fn(&Dashboard) -> Option<f64>| Signal::derive(move || dashboard.with(pick));

    view! {
        <header>
            <h1>"Electricity monitor"</h1>
            <StatusBadge status=Signal::derive(move || dashboard.with(|d| d.status))/>
        </header>

        <RelayControls relays/>

        <section class="panel stat-grid">
            <StatCard label="Voltage" unit="V" value=live(|d| d.live.map(|l| l.voltage))/>
            <StatCard label="Current" unit="A" value=live(|d| d.live.map(|l| l.current))/>
            <StatCard label="Power" unit="W" value=live(|d| d.live.map(|l| l.power))/>
            <StatCard label="Frequency" unit="Hz" value=live(|d| d.live.map(|l| l.frequency))/>
        </section>

        <section class="chart-grid">
            {Metric::ALL
                .into_iter()
                .map(|metric| {
                    let series = Signal::derive(move || dashboard.with(|d| d.series(metric).clone()));
                    view! { <MetricChart metric series/> }
                })
                .collect_view()}
        </section>

        <ReadingsTable table=Signal::derive(move || dashboard.with(|d| d.table.clone()))/>
    }
}

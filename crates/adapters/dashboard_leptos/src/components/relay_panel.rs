//! Master relay and load checkboxes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wattboard_domain::relay::{Load, RelayPanel};

use crate::api;
use crate::components::use_toasts;

/// Checkboxes for the master relay and its four loads.
///
/// Changes are shown immediately and then sent to the server; the panel the
/// server answers with replaces the local one. Loads are disabled while the
/// master relay is off.
#[component]
pub fn RelayControls(relays: RwSignal<RelayPanel>) -> impl IntoView {
    let toasts = use_toasts();

    let on_main = move |ev| {
        let on = event_target_checked(&ev);
        relays.update(|panel| panel.set_main(on));
        spawn_local(async move {
            match api::set_main_relay(on).await {
                Ok(panel) => relays.set(panel),
                Err(err) => {
                    leptos::logging::warn!("failed to switch main relay: {err}");
                    toasts.push(format!("Main relay: {err}"));
                }
            }
        });
    };

    view! {
        <section class="panel relay-panel">
            <h2>"Relays"</h2>
            <label>
                <input type="checkbox" prop:checked=move || relays.get().main() on:change=on_main/>
                "Main relay"
            </label>
            {Load::ALL
                .into_iter()
                .map(|load| view! { <LoadCheckbox load relays/> })
                .collect_view()}
        </section>
    }
}

#[component]
fn LoadCheckbox(load: Load, relays: RwSignal<RelayPanel>) -> impl IntoView {
    let toasts = use_toasts();
    let disabled = move || !relays.get().loads_enabled();

    let on_change = move |ev| {
        let on = event_target_checked(&ev);
        let mut panel = relays.get_untracked();
        if let Err(err) = panel.set_load(load, on) {
            toasts.push(err.to_string());
            return;
        }
        relays.set(panel);
        spawn_local(async move {
            match api::set_load(load, on).await {
                Ok(panel) => relays.set(panel),
                Err(err) => {
                    leptos::logging::warn!("failed to switch {load}: {err}");
                    toasts.push(format!("Load {}: {err}", load.number()));
                }
            }
        });
    };

    view! {
        <label class:disabled=disabled>
            <input
                type="checkbox"
                prop:checked=move || relays.get().load(load)
                prop:disabled=disabled
                on:change=on_change
            />
            {format!("Load {}", load.number())}
        </label>
    }
}

//! Browser `online` / `offline` notifications.

use wasm_bindgen::prelude::*;

/// Call `on_change(true)` when the browser regains its network connection
/// and `on_change(false)` when it loses it.
///
/// The listeners live as long as the page.
pub fn watch_connectivity(on_change: impl Fn(bool) + Clone + 'static) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("no window, connectivity changes will not be shown");
        return;
    };

    for (kind, online) in [("online", true), ("offline", false)] {
        let on_change = on_change.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            on_change(online);
        });
        if let Err(err) =
            window.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("failed to listen for {kind} events: {err:?}");
        }
        callback.forget();
    }
}

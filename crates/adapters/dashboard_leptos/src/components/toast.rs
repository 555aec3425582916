//! Toast notifications for transient error messages.

use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub text: String,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    toasts: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
}

impl ToastProvider {
    /// Push a new error toast. It auto-dismisses after 5 seconds.
    pub fn push(&self, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(ToastMessage { id, text }));

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(5000).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toast provider from Leptos context.
///
/// Outside a [`ToastContainer`] the returned provider works but renders
/// nothing.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().unwrap_or_else(|| {
        leptos::logging::warn!("ToastProvider not found in context");
        ToastProvider {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    })
}

/// Provides toast context to its children and renders active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let provider = ToastProvider {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || provider.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            {toast.text}
                            <button on:click=move |_| provider.dismiss(id)>"\u{d7}"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

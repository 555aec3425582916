//! Stat card component for displaying a live reading.

use leptos::prelude::*;

/// A card displaying a label and the latest value with its unit, or a dash
/// before the first reading arrives.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Unit shown after the value.
    unit: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">
                {move || value.get().map_or_else(|| "\u{2014}".to_string(), |v| v.to_string())}
                " "
                <span class="stat-unit">{unit}</span>
            </span>
        </div>
    }
}

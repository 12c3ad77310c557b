use leptos::prelude::*;

use crate::format::format_whole_percent;

/// Range input for an adjustable scenario's percentage.
///
/// The element stays mounted while hidden so dragging never re-creates it.
#[component]
pub fn AdjustmentSlider(
    #[prop(into)] label: String,
    hint: Option<String>,
    /// Current effective percentage (0-100)
    value: Signal<f64>,
    visible: Signal<bool>,
    on_change: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="adjustment" class:hidden=move || !visible.get()>
            <div class="adjustment-header">
                <label class="adjustment-label">{label}</label>
                <span class="adjustment-value">{move || format_whole_percent(value.get())}</span>
            </div>
            <input
                type="range"
                class="slider"
                min="0"
                max="100"
                step="10"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(pct) = event_target_value(&ev).parse::<f64>() {
                        on_change.run(pct);
                    }
                }
            />
            {hint.map(|h| view! { <p class="input-hint">{h}</p> })}
        </div>
    }
}

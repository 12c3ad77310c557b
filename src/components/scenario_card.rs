use leptos::prelude::*;
use scope3_core::{ScenarioDefinition, ScenarioKind};

use crate::format::format_tonnes;

/// Selectable card for one reduction scenario. Clicking anywhere on the card
/// toggles it; the switch only mirrors the state.
#[component]
pub fn ScenarioCard(
    definition: ScenarioDefinition,
    /// Whether the scenario is in the current selection
    active: Signal<bool>,
    on_toggle: Callback<ScenarioKind>,
) -> impl IntoView {
    let kind = definition.kind;
    let reduction = format!("-{} tCO₂e", format_tonnes(definition.max_reduction));
    let cost = format!("Cost: {}", definition.cost.label());

    view! {
        <div
            class="scenario-card"
            class:selected=move || active.get()
            on:click=move |_| on_toggle.run(kind)
        >
            <div class="scenario-card-header">
                <h4 class="scenario-name">{definition.name}</h4>
                <span class="switch">
                    <input type="checkbox" tabindex="-1" prop:checked=move || active.get() />
                    <span class="switch-track"></span>
                </span>
            </div>
            <p class="scenario-description">{definition.description}</p>
            <div class="scenario-meta">
                <span class="scenario-reduction">{reduction}</span>
                <span>{cost}</span>
                <span>{definition.timeline}</span>
            </div>
        </div>
    }
}

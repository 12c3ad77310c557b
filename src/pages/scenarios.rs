use std::sync::Arc;

use leptos::prelude::*;
use scope3_core::{
    default_reference_data, AdjustableScenario, Percentage, ScenarioDefinition,
    ScenarioImpactModel, ScenarioKind, SelectionState,
};

use crate::components::adjustment_slider::AdjustmentSlider;
use crate::components::category_table::CategoryTable;
use crate::components::impact_summary::ImpactSummary;
use crate::components::roadmap::Roadmap;
use crate::components::scenario_card::ScenarioCard;

#[component]
pub fn ScenariosPage() -> impl IntoView {
    let model = Arc::new(ScenarioImpactModel::new(default_reference_data()));
    let definitions: Vec<ScenarioDefinition> = model.scenarios().iter().cloned().collect();

    // The only mutable state on the page; everything below derives from it
    let (selection, set_selection) = signal(SelectionState::new());
    let (show_export, set_show_export) = signal(false);

    let report = {
        let model = Arc::clone(&model);
        Memo::new(move |_| selection.with(|s| model.evaluate(s)))
    };
    let has_selection = Memo::new(move |_| selection.with(|s| !s.is_empty()));

    let on_toggle = Callback::new(move |kind: ScenarioKind| {
        set_selection.update(|s| {
            s.toggle(kind);
        });
    });

    let cards = definitions
        .iter()
        .cloned()
        .map(|def| {
            let kind = def.kind;
            let active = Signal::derive(move || selection.with(|s| s.is_active(kind)));
            view! { <ScenarioCard definition=def active=active on_toggle=on_toggle /> }
        })
        .collect::<Vec<_>>();

    let sliders = AdjustableScenario::ALL
        .iter()
        .map(|&adjustable| {
            let kind = adjustable.kind();
            let def = model.scenarios().get(kind);
            let label = def.adjustment_label.clone().unwrap_or_else(|| def.name.clone());
            let hint = def.adjustment_hint.clone();

            let model = Arc::clone(&model);
            let value = Signal::derive(move || {
                selection.with(|s| model.effective_percentage(adjustable, s).value())
            });
            let visible = Signal::derive(move || selection.with(|s| s.is_active(kind)));
            let on_change = Callback::new(move |pct: f64| {
                set_selection.update(|s| s.set_percentage(adjustable, Percentage::new(pct)));
            });

            view! {
                <AdjustmentSlider
                    label=label
                    hint=hint
                    value=value
                    visible=visible
                    on_change=on_change
                />
            }
        })
        .collect::<Vec<_>>();

    let export_json = move || {
        report.with(|r| {
            r.to_json()
                .unwrap_or_else(|e| format!("Failed to export analysis: {}", e))
        })
    };

    view! {
        <div class="page scenarios-page">
            <style>{include_str!("scenarios.css")}</style>

            <div class="page-header">
                <div>
                    <h2>"What-If Scenario Analysis"</h2>
                    <p class="page-description">
                        "Model emission reduction strategies and their impact"
                    </p>
                </div>
                <div class="header-actions">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| set_selection.update(SelectionState::reset)
                    >
                        "Reset"
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| set_show_export.update(|v| *v = !*v)
                    >
                        {move || if show_export.get() { "Hide Export" } else { "Export Analysis" }}
                    </button>
                </div>
            </div>

            <div class="scenario-layout">
                <div class="scenario-column">
                    <div class="card">
                        <h3>"Reduction Scenarios"</h3>
                        <p class="card-subtitle">"Select strategies to model"</p>
                        <div class="scenario-list">{cards}</div>
                    </div>

                    <div class="card adjustments" class:hidden=move || !has_selection.get()>
                        <h3>"Scenario Adjustments"</h3>
                        {sliders}
                    </div>
                </div>

                <div class="results-column">
                    <ImpactSummary report=report />
                    <CategoryTable report=report />
                    <Roadmap report=report />

                    <Show when=move || show_export.get()>
                        <div class="card export">
                            <h3>"Analysis Export"</h3>
                            <pre class="export-json">{export_json}</pre>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

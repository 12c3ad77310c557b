use leptos::prelude::*;
use scope3_core::ScenarioReport;

use crate::format::{format_percent, format_tonnes};

/// Baseline, projected and reduction summary cards.
#[component]
pub fn ImpactSummary(report: Memo<ScenarioReport>) -> impl IntoView {
    view! {
        <div class="impact-summary">
            <div class="summary-card">
                <p class="summary-label">"Baseline"</p>
                <p class="summary-value">
                    {move || format_tonnes(report.with(|r| r.baseline_total))}
                </p>
                <p class="summary-unit">"tCO₂e/year"</p>
            </div>
            <div class="summary-card summary-projected">
                <p class="summary-label">"With Scenarios"</p>
                <p class="summary-value">
                    {move || format_tonnes(report.with(|r| r.projected_total))}
                </p>
                <p class="summary-unit">"tCO₂e/year"</p>
            </div>
            <div class="summary-card summary-reduction">
                <p class="summary-label">"Reduction"</p>
                <p class="summary-value">
                    {move || format_percent(report.with(|r| r.reduction_percentage))}
                </p>
                <p class="summary-unit">
                    {move || {
                        format!("{} tCO₂e saved", format_tonnes(report.with(|r| r.reduction)))
                    }}
                </p>
            </div>
        </div>
    }
}

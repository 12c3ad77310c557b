use leptos::prelude::*;
use scope3_core::ScenarioReport;

/// Numbered list of the selected scenarios and their timelines.
#[component]
pub fn Roadmap(report: Memo<ScenarioReport>) -> impl IntoView {
    move || {
        report.with(|r| {
            if r.roadmap.is_empty() {
                return None;
            }
            let steps = r
                .roadmap
                .iter()
                .map(|step| {
                    view! {
                        <li class="roadmap-step">
                            <span class="step-number">{step.step}</span>
                            <span class="step-name">{step.name.clone()}</span>
                            <span class="step-arrow">"\u{2192}"</span>
                            <span class="step-timeline">{step.timeline.clone()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>();

            Some(view! {
                <div class="card roadmap">
                    <h3>"Implementation Roadmap"</h3>
                    <ol class="roadmap-steps">{steps}</ol>
                </div>
            })
        })
    }
}

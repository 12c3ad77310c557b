use leptos::prelude::*;
use scope3_core::ScenarioReport;

use crate::format::format_tonnes;

/// Baseline vs scenario emissions for each category.
#[component]
pub fn CategoryTable(report: Memo<ScenarioReport>) -> impl IntoView {
    let rows = move || {
        report.with(|r| {
            r.categories
                .iter()
                .map(|c| {
                    let change = c.projected - c.baseline;
                    let change_class = if change < 0.0 {
                        "num change change-down"
                    } else {
                        "num change"
                    };
                    view! {
                        <tr>
                            <td class="category-name">{c.name.clone()}</td>
                            <td class="num">{format_tonnes(c.baseline)}</td>
                            <td class="num">{format_tonnes(c.projected)}</td>
                            <td class=change_class>{format_tonnes(change)}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="card category-impact">
            <h3>"Impact by Category"</h3>
            <p class="card-subtitle">"Baseline vs scenario emissions comparison"</p>
            <table class="category-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th class="num">"Baseline"</th>
                        <th class="num">"With Scenarios"</th>
                        <th class="num">"Change"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

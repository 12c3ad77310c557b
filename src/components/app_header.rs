use leptos::prelude::*;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"Scope3 Navigator"</h1>
            <p class="app-subtitle">"Carbon Intelligence"</p>
        </header>
    }
}

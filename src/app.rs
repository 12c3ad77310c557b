use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::pages::scenarios::ScenariosPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <AppHeader />
            <main class="content">
                <ScenariosPage />
            </main>
        </div>
    }
}

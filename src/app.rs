use leptos::prelude::*;

use crate::components::TaskBoard;
use crate::core::services::Preferences;

#[component]
pub fn App() -> impl IntoView {
    // Hand the browser-backed collaborators to the widget through context so
    // nothing below reaches for ambient globals directly.
    provide_context(Preferences::browser());

    view! {
        <main class="app">
            <TaskBoard />
        </main>
    }
}

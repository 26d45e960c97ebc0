use leptos::prelude::*;
use crate::core::services::load_board_settings;
use crate::features::tasks::TaskBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_board_settings());

    view! {
        <main class="mx-auto max-w-6xl p-6">
            <TaskBoard />
        </main>
    }
}

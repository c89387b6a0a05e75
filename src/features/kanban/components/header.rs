use leptos::prelude::*;

use crate::app::AppView;
use crate::core::services::ConnectionState;

#[component]
pub fn KanbanHeader(
    #[prop(into)] project_name: String,
    connection: Signal<ConnectionState>,
) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("AppView context");

    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{format!("Project: {}", project_name)}</h1>
                <span
                    class=move || format!("connection-status {}", connection.get().as_str())
                    title="Live updates"
                >{move || connection.get().as_str()}</span>
            </div>
            <div class="kanban-actions">
                <button class="btn-secondary kanban-header-btn" on:click=move |_| navigate.set(AppView::Projects)>"🡄"</button>
                <button class="btn-secondary kanban-header-btn" on:click=move |_| navigate.set(AppView::Calendar)>"Calendar"</button>
            </div>
        </header>
    }
}

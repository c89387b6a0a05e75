use leptos::prelude::*;

use crate::app::AppView;
use crate::core::services::Bootstrap;
use crate::features::calendar::CalendarView;

#[component]
pub fn Calendar() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let tasks = use_context::<Bootstrap>().unwrap_or_default().tasks;

    view! {
        <div class="calendar-wrapper">
            <header class="calendar-page-header">
                <h1>"Calendar"</h1>
                <button class="btn-secondary" on:click=move |_| navigate.set(AppView::Projects)>"🡄"</button>
            </header>
            <CalendarView tasks=tasks />
        </div>
    }
}

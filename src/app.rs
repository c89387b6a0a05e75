use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::services::{load_bootstrap, Bootstrap};
use crate::pages::{Calendar, Employees, Kanban, Projects};

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Projects,
    Kanban(String),
    Calendar,
    Employees,
}

impl AppView {
    /// First view from the bootstrap `page` hint. A board without a project
    /// id falls back to the project list.
    pub fn initial(bootstrap: &Bootstrap) -> Self {
        match bootstrap.page.as_deref() {
            Some("kanban") => bootstrap
                .project_id
                .clone()
                .map(AppView::Kanban)
                .unwrap_or(AppView::Projects),
            Some("calendar") => AppView::Calendar,
            Some("employees") => AppView::Employees,
            _ => AppView::Projects,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let bootstrap = load_bootstrap();
    let (current_view, set_current_view) = signal(AppView::initial(&bootstrap));

    provide_context(set_current_view);
    provide_context(BoardConfig::from_bootstrap(&bootstrap));
    provide_context(bootstrap);

    let nav_link = move |label: &'static str, target: AppView| {
        let active = {
            let target = target.clone();
            move || match (&current_view.get(), &target) {
                (AppView::Kanban(_), AppView::Projects) => true,
                (current, target) => current == target,
            }
        };
        view! {
            <button class="nav-link" class:active=active on:click=move |_| set_current_view.set(target.clone())>
                {label}
            </button>
        }
    };

    view! {
        <nav class="app-nav">
            {nav_link("Projects", AppView::Projects)}
            {nav_link("Calendar", AppView::Calendar)}
            {nav_link("Employees", AppView::Employees)}
        </nav>
        <main class="app">
            {move || match current_view.get() {
                AppView::Projects => view! { <Projects /> }.into_any(),
                AppView::Kanban(project_id) => view! { <Kanban project_id=project_id /> }.into_any(),
                AppView::Calendar => view! { <Calendar /> }.into_any(),
                AppView::Employees => view! { <Employees /> }.into_any(),
            }}
        </main>
    }
}

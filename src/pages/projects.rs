use leptos::prelude::*;

use crate::app::AppView;
use crate::components::context_menu::{use_menu_state, CardMenu, MenuItem};
use crate::core::services::Bootstrap;
use crate::models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ProjectStats {
    total: usize,
    in_progress: usize,
}

fn project_stats(tasks: &[Task], project_id: &str) -> ProjectStats {
    tasks
        .iter()
        .filter(|t| t.project_id.as_deref() == Some(project_id))
        .fold(ProjectStats::default(), |mut stats, t| {
            stats.total += 1;
            if t.status == TaskStatus::InProgress {
                stats.in_progress += 1;
            }
            stats
        })
}

#[component]
pub fn Projects() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let bootstrap = use_context::<Bootstrap>().unwrap_or_default();
    let menus = use_menu_state();

    let cards = bootstrap
        .projects
        .iter()
        .map(|project| {
            let stats = project_stats(&bootstrap.tasks, &project.id);
            let id = project.id.clone();
            let items = vec![
                MenuItem::new("Open board", Callback::new({
                    let id = id.clone();
                    move |_| navigate.set(AppView::Kanban(id.clone()))
                })),
                MenuItem::new("Calendar", Callback::new(move |_| navigate.set(AppView::Calendar))),
            ];
            let open = move |_| navigate.set(AppView::Kanban(id.clone()));

            view! {
                <div class="project-card" on:click=open>
                    <div class="project-card-header">
                        <h3>{project.name.clone()}</h3>
                        <CardMenu menu_id=format!("project-{}", project.id) menus=menus items=items />
                    </div>
                    <p>{project.description.clone().unwrap_or_default()}</p>
                    <div class="project-stats">
                        <span>{format!("{} tasks", stats.total)}</span>
                        <span>{format!("{} in progress", stats.in_progress)}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="projects-page">
            <header class="projects-header">
                <h1>"Projects"</h1>
            </header>
            {if cards.is_empty() {
                view! { <p class="empty-state">"No projects yet"</p> }.into_any()
            } else {
                view! { <div class="projects-grid">{cards}</div> }.into_any()
            }}
        </div>
    }
}

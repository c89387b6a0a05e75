use leptos::ev;
use leptos::prelude::*;

use crate::components::context_menu::{CardMenu, MenuItem, MenuState};
use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskCard(
    task: Task,
    dragging: ReadSignal<Option<String>>,
    menus: RwSignal<MenuState>,
    start_drag: Callback<String>,
    end_drag: Callback<()>,
    move_to: Callback<(String, TaskStatus)>,
) -> impl IntoView {
    let task_id = task.id.clone();
    let is_dragging = {
        let task_id = task_id.clone();
        move || dragging.with(|d| d.as_deref() == Some(task_id.as_str()))
    };

    let on_dragstart = {
        let task_id = task_id.clone();
        move |e: ev::DragEvent| {
            // Firefox only starts a drag when some data is set.
            if let Some(transfer) = e.data_transfer() {
                if let Err(e) = transfer.set_data("text/plain", &task_id) {
                    web_sys::console::error_1(&format!("Failed to set drag data: {:?}", e).into());
                }
            }
            start_drag.run(task_id.clone());
        }
    };

    let move_items: Vec<MenuItem> = TaskStatus::all()
        .into_iter()
        .filter(|status| *status != task.status)
        .map(|status| {
            let task_id = task_id.clone();
            MenuItem::new(
                format!("Move to {}", status.as_str()),
                Callback::new(move |_| move_to.run((task_id.clone(), status))),
            )
        })
        .collect();

    let index = task.display_index();
    let kind = task.badge_kind();

    view! {
        <div
            class="kanban-card project-card"
            class:dragging=is_dragging
            draggable="true"
            data-task-id=task_id.clone()
            on:dragstart=on_dragstart
            on:dragend=move |_| end_drag.run(())
        >
            <div class="project-card-header">
                <div class=format!("project-card-heading priority-{}", kind.as_class())>{task.name.clone()}</div>
                <CardMenu menu_id=format!("task-{}", task_id) menus=menus items=move_items />
            </div>
            <div class="project-card-index">{index}</div>
            <div class="employees-list">
                {task.employees.iter().map(|employee| view! {
                    <div class="employee-bubble" title=employee.full_name.clone().unwrap_or_default()>
                        {employee.label()}
                    </div>
                }).collect::<Vec<_>>()}
                <div class="employee-bubble">"..."</div>
            </div>
        </div>
    }
}

use leptos::ev;
use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::components::context_menu::MenuState;
use crate::features::kanban::board::BoardState;
use crate::models::TaskStatus;

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    board: ReadSignal<BoardState>,
    dragging: ReadSignal<Option<String>>,
    menus: RwSignal<MenuState>,
    start_drag: Callback<String>,
    end_drag: Callback<()>,
    drop_on: Callback<TaskStatus>,
    move_to: Callback<(String, TaskStatus)>,
) -> impl IntoView {
    view! {
        <div
            class="kanban-column"
            data-status=status.key()
            on:dragover=move |e: ev::DragEvent| e.prevent_default()
            on:drop=move |e: ev::DragEvent| {
                e.prevent_default();
                drop_on.run(status);
            }
        >
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{move || board.with(|b| b.count(status))}</span>
            </div>
            <div class="column-content">
                {move || {
                    board.with(|b| b.column(status))
                        .into_iter()
                        .map(|task| view! {
                            <TaskCard
                                task=task
                                dragging=dragging
                                menus=menus
                                start_drag=start_drag
                                end_drag=end_drag
                                move_to=move_to
                            />
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

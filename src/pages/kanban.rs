use leptos::prelude::*;

use crate::components::context_menu::use_menu_state;
use crate::core::services::Bootstrap;
use crate::features::kanban::{use_board, KanbanColumn, KanbanHeader};
use crate::models::TaskStatus;

#[component]
pub fn Kanban(project_id: String) -> impl IntoView {
    let bootstrap = use_context::<Bootstrap>().unwrap_or_default();
    let project_name = bootstrap
        .projects
        .iter()
        .find(|p| p.id == project_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown Project".to_string());

    let hook = use_board(Some(project_id), bootstrap.tasks);
    let menus = use_menu_state();

    view! {
        <div class="kanban-page">
            <KanbanHeader project_name=project_name connection=hook.connection />
            <div class="kanban-board">
                {TaskStatus::all().into_iter().map(|status| view! {
                    <KanbanColumn
                        status=status
                        board=hook.board
                        dragging=hook.dragging
                        menus=menus
                        start_drag=hook.start_drag
                        end_drag=hook.end_drag
                        drop_on=hook.drop_on
                        move_to=hook.move_to
                    />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

use leptos::ev;
use leptos::prelude::*;

use crate::core::services::Bootstrap;
use crate::features::employees::{AddEmployeeModal, DeleteEmployeeModal, ModalEvent, ModalState};

#[component]
pub fn Employees() -> impl IntoView {
    let employees = use_context::<Bootstrap>().unwrap_or_default().employees;
    let add_modal = RwSignal::new(ModalState::Closed);
    let delete_modal = RwSignal::new(ModalState::Closed);

    let open = move |modal: RwSignal<ModalState>| {
        move |e: ev::MouseEvent| {
            e.prevent_default();
            modal.update(|s| *s = s.on(ModalEvent::Trigger));
        }
    };

    let rows = employees
        .iter()
        .map(|e| {
            let field = |v: &Option<String>| v.clone().unwrap_or_default();
            view! {
                <tr>
                    <td>{e.full_name()}</td>
                    <td>{field(&e.email)}</td>
                    <td>{field(&e.hire_date)}</td>
                    <td>{field(&e.birth_date)}</td>
                    <td>{field(&e.contacts)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="employees-page">
            <header class="employees-header">
                <h1>"Employees"</h1>
                <div class="employees-actions">
                    <a href="#" id="add-link" class="add-link" on:click=open(add_modal)>"Add employee"</a>
                    <a href="#" id="delete-link" class="delete-link" on:click=open(delete_modal)>"Delete employee"</a>
                </div>
            </header>
            <table class="employees-table">
                <thead>
                    <tr>
                        <th>"Full name"</th>
                        <th>"Email"</th>
                        <th>"Hired"</th>
                        <th>"Born"</th>
                        <th>"Contacts"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <AddEmployeeModal state=add_modal />
            <DeleteEmployeeModal state=delete_modal employees=employees />
        </div>
    }
}

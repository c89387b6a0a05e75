use leptos::html::{Dialog, Form};
use leptos::prelude::*;
use web_sys::{MouseEvent, SubmitEvent};

use crate::features::employees::form::submit_form;
use crate::features::employees::modal::{ModalEvent, ModalState, ADD_FIELDS, DELETE_FIELD};
use crate::models::Employee;

/// Shared `<dialog>` frame: keeps the native dialog in step with `state`.
#[component]
fn EmployeeModal(
    id: &'static str,
    form_id: &'static str,
    title: &'static str,
    submit_label: &'static str,
    state: RwSignal<ModalState>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();
    let form_ref = NodeRef::<Form>::new();
    let dispatch = move |event: ModalEvent| state.update(|s| *s = s.on(event));

    Effect::new(move |_| {
        let open = state.get().is_open();
        let Some(dialog) = dialog_ref.get() else { return };
        if open && !dialog.open() {
            if let Err(e) = dialog.show_modal() {
                web_sys::console::error_1(&format!("Cannot open {}: {:?}", id, e).into());
            }
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let on_backdrop = move |ev: MouseEvent| {
        if ev.target().is_some() && ev.target() == ev.current_target() {
            dispatch(ModalEvent::Backdrop);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_form(form_id, form_ref.get());
    };

    view! {
        <dialog
            node_ref=dialog_ref
            id=id
            class="modal-overlay"
            on:click=on_backdrop
            on:cancel=move |_: web_sys::Event| dispatch(ModalEvent::Escape)
            on:close=move |_| state.set(ModalState::Closed)
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="close-button" on:click=move |_| dispatch(ModalEvent::CloseButton)>"×"</button>
                </div>
                <form node_ref=form_ref id=form_id on:submit=on_submit>
                    {children()}
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary cancel-button" on:click=move |_| dispatch(ModalEvent::CancelButton)>"Cancel"</button>
                        <button type="submit" class="btn-primary">{submit_label}</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

fn field_label(name: &str) -> String {
    let mut label = name.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn field_type(name: &str) -> &'static str {
    match name {
        "hire_date" | "birth_date" => "date",
        "email" => "email",
        _ => "text",
    }
}

#[component]
pub fn AddEmployeeModal(state: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <EmployeeModal
            id="addEmployeeModal"
            form_id="addEmployeeForm"
            title="Add employee"
            submit_label="Add"
            state=state
        >
            {ADD_FIELDS.iter().map(|&name| view! {
                <div class="form-group">
                    <label for=format!("employee-{}", name)>{field_label(name)}</label>
                    <input
                        type=field_type(name)
                        id=format!("employee-{}", name)
                        name=name
                        required=matches!(name, "surname" | "name")
                    />
                </div>
            }).collect::<Vec<_>>()}
        </EmployeeModal>
    }
}

#[component]
pub fn DeleteEmployeeModal(state: RwSignal<ModalState>, employees: Vec<Employee>) -> impl IntoView {
    view! {
        <EmployeeModal
            id="deleteEmployeeModal"
            form_id="deleteEmployeeForm"
            title="Delete employee"
            submit_label="Delete"
            state=state
        >
            <div class="form-group">
                <label for="employee-select">"Employee"</label>
                <select id="employee-select" name=DELETE_FIELD required=true>
                    {employees.into_iter().map(|e| {
                        let label = e.full_name();
                        view! { <option value=e.id>{label}</option> }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </EmployeeModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label("hire_date"), "Hire date");
        assert_eq!(field_label("email"), "Email");
    }

    #[test]
    fn test_field_types() {
        assert_eq!(field_type("birth_date"), "date");
        assert_eq!(field_type("email"), "email");
        assert_eq!(field_type("patronymic"), "text");
    }
}

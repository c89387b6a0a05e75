use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Everything that can change a modal's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Trigger,
    CloseButton,
    CancelButton,
    Backdrop,
    Escape,
}

impl ModalState {
    pub fn on(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Trigger => ModalState::Open,
            ModalEvent::CloseButton
            | ModalEvent::CancelButton
            | ModalEvent::Backdrop
            | ModalEvent::Escape => ModalState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

/// Folds submitted `(name, value)` pairs into a map. A repeated name keeps
/// its last value.
pub fn collect_fields<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

pub const ADD_FIELDS: [&str; 7] = [
    "surname",
    "name",
    "patronymic",
    "hire_date",
    "birth_date",
    "contacts",
    "email",
];

pub const DELETE_FIELD: &str = "employee_id";

pub mod components;
pub mod form;
pub mod modal;

pub use components::{AddEmployeeModal, DeleteEmployeeModal};
pub use modal::{ModalEvent, ModalState};

pub mod employee_modal;

pub use employee_modal::*;
